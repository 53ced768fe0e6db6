use std::collections::HashMap;

use anyhow::Result;

use crate::client::SpotifyApi;
use crate::models::AudioFeatures;

use super::TrackTable;

/// Look up audio features for every row's track id and left-join them
/// onto the table by id. A lookup that returns nothing leaves the row's
/// feature columns null; the row count never changes.
pub fn augment_features<C: SpotifyApi>(client: &C, table: &mut TrackTable) -> Result<()> {
    let mut found: HashMap<String, AudioFeatures> = HashMap::new();
    for row in &table.rows {
        // one lookup per row; repeated ids are re-queried
        if let Some(features) = client.audio_features(&row.record.track_id)? {
            found.insert(features.track_id.clone(), features);
        }
    }

    for row in &mut table.rows {
        row.features = found.get(&row.record.track_id).cloned();
    }
    Ok(())
}
