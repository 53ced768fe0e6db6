// Stacking and deduplication behavior of the working table

use super::{LabelKind, TrackRecord, TrackTable};

#[cfg(test)]
mod tests {
    use super::*;

    fn record(track_id: &str, mood: &str) -> TrackRecord {
        TrackRecord {
            track_name: format!("Track {track_id}"),
            track_id: track_id.to_string(),
            artist_name: "Artist".to_string(),
            artist_id: "artist-1".to_string(),
            album_name: "Album".to_string(),
            album_id: "album-1".to_string(),
            popularity: 40,
            mood: Some(mood.to_string()),
            time_range: None,
        }
    }

    #[test]
    fn test_identical_rows_collapse_to_one() {
        let mut table = TrackTable::new(LabelKind::Mood);
        table.stack(vec![record("t1", "Happy"), record("t1", "Happy")]);

        table.dedup();

        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_rows_differing_only_in_mood_survive() {
        let mut table = TrackTable::new(LabelKind::Mood);
        table.stack(vec![record("t1", "Happy"), record("t1", "Sad")]);

        table.dedup();

        assert_eq!(table.len(), 2, "mood is part of the row identity");
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let mut table = TrackTable::new(LabelKind::Mood);
        table.stack(vec![
            record("t1", "Happy"),
            record("t2", "Happy"),
            record("t1", "Happy"),
            record("t1", "Sad"),
        ]);

        table.dedup();
        let after_first = table.rows.clone();
        table.dedup();

        assert_eq!(table.rows, after_first);
    }

    #[test]
    fn test_dedup_keeps_first_occurrence_order() {
        let mut table = TrackTable::new(LabelKind::Mood);
        table.stack(vec![
            record("t1", "Happy"),
            record("t2", "Happy"),
            record("t1", "Happy"),
            record("t3", "Happy"),
            record("t2", "Happy"),
        ]);

        table.dedup();

        let ids: Vec<&str> = table
            .rows
            .iter()
            .map(|row| row.record.track_id.as_str())
            .collect();
        assert_eq!(ids, vec!["t1", "t2", "t3"]);
    }

    #[test]
    fn test_stack_appends_in_order() {
        let mut table = TrackTable::new(LabelKind::Mood);
        table.stack(vec![record("t1", "Happy")]);
        table.stack(vec![record("t2", "Sad")]);

        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].record.track_id, "t1");
        assert_eq!(table.rows[1].record.track_id, "t2");
        assert!(table.rows.iter().all(|row| row.features.is_none()));
    }

    #[test]
    fn test_empty_table() {
        let table = TrackTable::new(LabelKind::TimeWindow);
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }
}
