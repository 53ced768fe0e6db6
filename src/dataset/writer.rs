use std::path::Path;

use anyhow::{Context, Result};

use super::{LabelKind, TableRow, TrackTable};

/// Column order of the audio feature block
const FEATURE_COLUMNS: [&str; 13] = [
    "danceability",
    "energy",
    "key",
    "loudness",
    "mode",
    "speechiness",
    "acousticness",
    "instrumentalness",
    "liveness",
    "valence",
    "tempo",
    "duration_ms",
    "time_signature",
];

/// Write the table as CSV. The first column is the row index with an
/// empty header name; null cells are written as empty fields; the genres
/// column serializes its string list as JSON.
pub fn write_csv(table: &TrackTable, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let has_genres = table.rows.iter().any(|row| row.genres.is_some());

    writer.write_record(header(table.label, has_genres))?;
    for (index, row) in table.rows.iter().enumerate() {
        writer.write_record(cells(table.label, has_genres, index, row)?)?;
    }
    writer.flush()?;
    Ok(())
}

fn header(label: LabelKind, has_genres: bool) -> Vec<String> {
    let mut columns = vec![
        String::new(),
        "track_name".to_string(),
        "track_id".to_string(),
        "artist_name".to_string(),
        "artist_id".to_string(),
        "album_name".to_string(),
        "album_id".to_string(),
        "popularity".to_string(),
    ];
    match label {
        LabelKind::Mood => columns.push("mood".to_string()),
        LabelKind::TimeWindow => columns.push("time_range".to_string()),
    }
    columns.extend(FEATURE_COLUMNS.iter().map(|c| c.to_string()));
    if has_genres {
        columns.push("genres".to_string());
    }
    columns
}

fn cells(
    label: LabelKind,
    has_genres: bool,
    index: usize,
    row: &TableRow,
) -> Result<Vec<String>> {
    let record = &row.record;
    let mut cells = vec![
        index.to_string(),
        record.track_name.clone(),
        record.track_id.clone(),
        record.artist_name.clone(),
        record.artist_id.clone(),
        record.album_name.clone(),
        record.album_id.clone(),
        record.popularity.to_string(),
    ];

    match label {
        LabelKind::Mood => cells.push(record.mood.clone().unwrap_or_default()),
        LabelKind::TimeWindow => cells.push(
            record
                .time_range
                .map(|w| w.as_str().to_string())
                .unwrap_or_default(),
        ),
    }

    match &row.features {
        Some(f) => {
            cells.push(f.danceability.to_string());
            cells.push(f.energy.to_string());
            cells.push(f.key.to_string());
            cells.push(f.loudness.to_string());
            cells.push(f.mode.to_string());
            cells.push(f.speechiness.to_string());
            cells.push(f.acousticness.to_string());
            cells.push(f.instrumentalness.to_string());
            cells.push(f.liveness.to_string());
            cells.push(f.valence.to_string());
            cells.push(f.tempo.to_string());
            cells.push(f.duration_ms.to_string());
            cells.push(f.time_signature.to_string());
        }
        None => cells.extend(std::iter::repeat(String::new()).take(FEATURE_COLUMNS.len())),
    }

    if has_genres {
        match &row.genres {
            Some(genres) => cells.push(serde_json::to_string(genres)?),
            None => cells.push(String::new()),
        }
    }

    Ok(cells)
}
