use anyhow::Result;

use crate::client::SpotifyApi;

use super::TrackTable;

/// Attach each row's artist genre tags as a new column. The full list of
/// genre lists is computed first, in row order, then assigned in one
/// pass; the table must not be reordered in between.
pub fn augment_genres<C: SpotifyApi>(client: &C, table: &mut TrackTable) -> Result<()> {
    let mut genre_lists = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        // one lookup per row, not per unique artist
        let artist = client.artist(&row.record.artist_id)?;
        genre_lists.push(artist.genres);
    }

    for (row, genres) in table.rows.iter_mut().zip(genre_lists) {
        row.genres = Some(genres);
    }
    Ok(())
}
