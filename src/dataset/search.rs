use anyhow::Result;

use crate::client::SpotifyApi;

/// The playlists found for one mood keyword
#[derive(Debug, Clone)]
pub struct MoodPlaylists {
    pub mood: String,
    pub playlist_ids: Vec<String>,
}

/// Query the playlist search once per keyword and collect the ids of the
/// first page of results. The same playlist may surface under more than
/// one keyword; duplicates are not filtered here.
pub fn build_mood_index<C: SpotifyApi>(
    client: &C,
    moods: &[String],
) -> Result<Vec<MoodPlaylists>> {
    let mut index = Vec::with_capacity(moods.len());
    for mood in moods {
        let playlists = client.search_playlists(mood)?;
        index.push(MoodPlaylists {
            mood: mood.clone(),
            playlist_ids: playlists.into_iter().map(|p| p.id).collect(),
        });
    }
    Ok(index)
}
