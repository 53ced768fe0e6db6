// Extraction scenarios for both upstream shapes

use crate::models::{AlbumRef, ArtistRef, PlaylistEntry, TrackObject};

use super::{SkipReason, TimeRange, extract_playlist_entries, extract_top_items};

#[cfg(test)]
mod tests {
    use super::*;

    fn test_track(name: &str, id: &str) -> TrackObject {
        TrackObject {
            name: Some(name.to_string()),
            id: Some(id.to_string()),
            artists: vec![ArtistRef {
                name: Some("Test Artist".to_string()),
                id: Some("artist-1".to_string()),
            }],
            album: Some(AlbumRef {
                name: Some("Test Album".to_string()),
                id: Some("album-1".to_string()),
            }),
            popularity: Some(50),
        }
    }

    fn entry(track: Option<TrackObject>) -> PlaylistEntry {
        PlaylistEntry { track }
    }

    #[test]
    fn test_skips_items_missing_track_object() {
        let entries = vec![
            entry(Some(test_track("Song One", "t1"))),
            entry(None),
            entry(Some(test_track("Song Three", "t3"))),
        ];

        let extraction = extract_playlist_entries(&entries, "Happy");

        assert_eq!(extraction.records.len(), 2);
        assert_eq!(extraction.records[0].track_id, "t1");
        assert_eq!(extraction.records[1].track_id, "t3");
        assert!(
            extraction
                .records
                .iter()
                .all(|r| r.mood.as_deref() == Some("Happy")),
            "all extracted records carry the searched mood"
        );
        assert_eq!(extraction.skipped, vec![SkipReason::MissingTrack]);
    }

    #[test]
    fn test_malformed_items_fully_excluded() {
        let mut no_id = test_track("Local Track", "ignored");
        no_id.id = None;
        let mut no_artists = test_track("Orphan Track", "t-orphan");
        no_artists.artists.clear();
        let mut no_album = test_track("Single", "t-single");
        no_album.album = None;
        let mut no_popularity = test_track("Obscure", "t-obscure");
        no_popularity.popularity = None;

        let entries = vec![
            entry(Some(test_track("Good Song", "t-good"))),
            entry(Some(no_id)),
            entry(Some(no_artists)),
            entry(Some(no_album)),
            entry(Some(no_popularity)),
        ];

        let extraction = extract_playlist_entries(&entries, "Calm");

        assert!(extraction.records.len() <= entries.len());
        assert_eq!(extraction.records.len(), 1);
        assert_eq!(extraction.skipped.len(), 4);
        // no record carries a partially-filled field set
        for record in &extraction.records {
            assert!(!record.track_name.is_empty());
            assert!(!record.track_id.is_empty());
            assert!(!record.artist_name.is_empty());
            assert!(!record.artist_id.is_empty());
            assert!(!record.album_name.is_empty());
            assert!(!record.album_id.is_empty());
        }
    }

    #[test]
    fn test_only_first_artist_kept() {
        let mut track = test_track("Collab", "t-collab");
        track.artists = vec![
            ArtistRef {
                name: Some("Lead Artist".to_string()),
                id: Some("artist-lead".to_string()),
            },
            ArtistRef {
                name: Some("Featured Artist".to_string()),
                id: Some("artist-feat".to_string()),
            },
        ];

        let extraction = extract_playlist_entries(&[entry(Some(track))], "Energetic");

        assert_eq!(extraction.records.len(), 1);
        assert_eq!(extraction.records[0].artist_name, "Lead Artist");
        assert_eq!(extraction.records[0].artist_id, "artist-lead");
    }

    #[test]
    fn test_top_items_labeled_with_time_window() {
        let items = vec![test_track("Song A", "t1"), test_track("Song B", "t2")];

        let extraction = extract_top_items(&items, TimeRange::Short);

        assert_eq!(extraction.records.len(), 2);
        for record in &extraction.records {
            assert_eq!(record.time_range, Some(TimeRange::Short));
            assert!(record.mood.is_none());
        }
    }

    #[test]
    fn test_playlist_entries_carry_no_time_window() {
        let extraction =
            extract_playlist_entries(&[entry(Some(test_track("Song", "t1")))], "Sad");

        assert_eq!(extraction.records.len(), 1);
        assert!(extraction.records[0].time_range.is_none());
        assert_eq!(extraction.records[0].mood.as_deref(), Some("Sad"));
    }

    #[test]
    fn test_skip_summary_aggregates_reasons() {
        let mut no_artists = test_track("Orphan", "t-orphan");
        no_artists.artists.clear();

        let entries = vec![entry(None), entry(None), entry(Some(no_artists))];
        let extraction = extract_playlist_entries(&entries, "Happy");

        let summary = extraction.skip_summary().expect("skips were recorded");
        assert_eq!(summary, "2 missing track object, 1 empty artist list");
    }

    #[test]
    fn test_clean_page_has_no_summary() {
        let extraction =
            extract_playlist_entries(&[entry(Some(test_track("Song", "t1")))], "Happy");
        assert!(extraction.skip_summary().is_none());
    }
}
