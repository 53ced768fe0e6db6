use anyhow::Result;

use crate::client::SpotifyApi;

use super::{
    Extraction, LabelKind, TimeRange, TrackTable, augment_features, augment_genres,
    build_mood_index, extract_playlist_entries, extract_top_items,
};

/// Build the mood-labeled dataset: search playlists per mood keyword,
/// extract and label their tracks, drop exact duplicates, then join
/// audio features.
pub fn build_mood_dataset<C: SpotifyApi>(client: &C, moods: &[String]) -> Result<TrackTable> {
    println!("Generating mood lists...");
    let index = build_mood_index(client, moods)?;
    for entry in &index {
        println!("  {}: {} playlists", entry.mood, entry.playlist_ids.len());
    }

    println!("Building track table...");
    let mut table = TrackTable::new(LabelKind::Mood);
    for entry in &index {
        for playlist_id in &entry.playlist_ids {
            let items = client.playlist_items(playlist_id)?;
            let extraction = extract_playlist_entries(&items, &entry.mood);
            report_skips(&extraction);
            table.stack(extraction.records);
        }
    }

    let before = table.len();
    table.dedup();
    println!(
        "Collected {} tracks ({} duplicates dropped)",
        table.len(),
        before - table.len()
    );

    println!("Augmenting track features...");
    augment_features(client, &mut table)?;

    Ok(table)
}

/// Build the user top-tracks dataset across the three time windows,
/// including the artist genre column
pub fn build_user_dataset<C: SpotifyApi>(client: &C) -> Result<TrackTable> {
    println!("Retrieving user top tracks...");
    let mut table = TrackTable::new(LabelKind::TimeWindow);
    for (window, limit) in TimeRange::RANK_PLAN {
        let items = client.top_tracks(window, limit)?;
        let extraction = extract_top_items(&items, window);
        report_skips(&extraction);
        println!("  {}: {} tracks", window.as_str(), extraction.records.len());
        table.stack(extraction.records);
    }

    let before = table.len();
    table.dedup();
    if before > table.len() {
        println!("Dropped {} duplicate tracks", before - table.len());
    }

    println!("Augmenting track features...");
    augment_features(client, &mut table)?;

    println!("Augmenting genres...");
    augment_genres(client, &mut table)?;

    Ok(table)
}

fn report_skips(extraction: &Extraction) {
    if let Some(summary) = extraction.skip_summary() {
        println!(
            "  Skipped {} items: {}",
            extraction.skipped.len(),
            summary
        );
    }
}
