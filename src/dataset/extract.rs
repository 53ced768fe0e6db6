use std::fmt;

use crate::models::{PlaylistEntry, TrackObject};

use super::{TimeRange, TrackRecord};

/// Label applied to every record of one extraction batch. The caller
/// picks the variant; nothing is inferred from the payload.
#[derive(Debug, Clone, Copy)]
pub enum RecordLabel<'a> {
    Mood(&'a str),
    Window(TimeRange),
}

/// Why an individual item was left out of a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingTrack,
    MissingTrackId,
    MissingTrackName,
    NoArtists,
    MissingArtistFields,
    MissingAlbum,
    MissingPopularity,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::MissingTrack => "missing track object",
            SkipReason::MissingTrackId => "missing track id",
            SkipReason::MissingTrackName => "missing track name",
            SkipReason::NoArtists => "empty artist list",
            SkipReason::MissingArtistFields => "artist without name or id",
            SkipReason::MissingAlbum => "missing album",
            SkipReason::MissingPopularity => "missing popularity",
        };
        write!(f, "{text}")
    }
}

/// Records extracted from one page of items, with the reasons for every
/// item that was dropped
#[derive(Debug, Default)]
pub struct Extraction {
    pub records: Vec<TrackRecord>,
    pub skipped: Vec<SkipReason>,
}

impl Extraction {
    /// Per-reason counts as a single status line, e.g.
    /// "2 missing track object, 1 missing track id"
    pub fn skip_summary(&self) -> Option<String> {
        if self.skipped.is_empty() {
            return None;
        }
        let mut counts: Vec<(SkipReason, usize)> = Vec::new();
        for reason in &self.skipped {
            match counts.iter_mut().find(|(r, _)| *r == *reason) {
                Some((_, n)) => *n += 1,
                None => counts.push((*reason, 1)),
            }
        }
        Some(
            counts
                .iter()
                .map(|(reason, n)| format!("{n} {reason}"))
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

/// The extraction core shared by both upstream shapes. Only the first
/// listed artist is kept as the track's artist; the rest are discarded.
pub fn record_from_track(
    track: &TrackObject,
    label: RecordLabel,
) -> Result<TrackRecord, SkipReason> {
    let track_id = track.id.clone().ok_or(SkipReason::MissingTrackId)?;
    let track_name = track.name.clone().ok_or(SkipReason::MissingTrackName)?;

    let artist = track.artists.first().ok_or(SkipReason::NoArtists)?;
    let (artist_name, artist_id) = match (artist.name.clone(), artist.id.clone()) {
        (Some(name), Some(id)) => (name, id),
        _ => return Err(SkipReason::MissingArtistFields),
    };

    let album = track.album.as_ref().ok_or(SkipReason::MissingAlbum)?;
    let (album_name, album_id) = match (album.name.clone(), album.id.clone()) {
        (Some(name), Some(id)) => (name, id),
        _ => return Err(SkipReason::MissingAlbum),
    };

    let popularity = track.popularity.ok_or(SkipReason::MissingPopularity)?;

    let (mood, time_range) = match label {
        RecordLabel::Mood(mood) => (Some(mood.to_string()), None),
        RecordLabel::Window(window) => (None, Some(window)),
    };

    Ok(TrackRecord {
        track_name,
        track_id,
        artist_name,
        artist_id,
        album_name,
        album_id,
        popularity,
        mood,
        time_range,
    })
}

/// Extract records from playlist membership items, labeling each with the
/// searched mood. Items with missing fields are skipped, not dropped
/// silently: every skip carries its reason.
pub fn extract_playlist_entries(entries: &[PlaylistEntry], mood: &str) -> Extraction {
    let mut extraction = Extraction::default();
    for entry in entries {
        let Some(track) = entry.track.as_ref() else {
            extraction.skipped.push(SkipReason::MissingTrack);
            continue;
        };
        match record_from_track(track, RecordLabel::Mood(mood)) {
            Ok(record) => extraction.records.push(record),
            Err(reason) => extraction.skipped.push(reason),
        }
    }
    extraction
}

/// Extract records from top-item results, labeling each with the queried
/// time window. Top items are track objects directly, with no wrapper.
pub fn extract_top_items(items: &[TrackObject], window: TimeRange) -> Extraction {
    let mut extraction = Extraction::default();
    for item in items {
        match record_from_track(item, RecordLabel::Window(window)) {
            Ok(record) => extraction.records.push(record),
            Err(reason) => extraction.skipped.push(reason),
        }
    }
    extraction
}
