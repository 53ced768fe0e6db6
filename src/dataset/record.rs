use crate::models::AudioFeatures;

/// One of the three listening-history windows the top-items endpoint defines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeRange {
    Short,
    Medium,
    Long,
}

impl TimeRange {
    /// Windows paired with the per-window top-track limits used for the
    /// user dataset
    pub const RANK_PLAN: [(TimeRange, u32); 3] = [
        (TimeRange::Short, 10),
        (TimeRange::Medium, 20),
        (TimeRange::Long, 50),
    ];

    /// Wire value for the top-items endpoint, also the CSV cell value
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Short => "short_term",
            TimeRange::Medium => "medium_term",
            TimeRange::Long => "long_term",
        }
    }
}

/// A normalized track, created once during extraction and never mutated.
/// Exactly one of `mood` / `time_range` is set, depending on which
/// pipeline produced the record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackRecord {
    pub track_name: String,
    pub track_id: String,
    pub artist_name: String,
    pub artist_id: String,
    pub album_name: String,
    pub album_id: String,
    pub popularity: u32,
    pub mood: Option<String>,
    pub time_range: Option<TimeRange>,
}

/// A record widened by the augmentation left-joins
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub record: TrackRecord,
    pub features: Option<AudioFeatures>,
    pub genres: Option<Vec<String>>,
}

impl TableRow {
    pub fn new(record: TrackRecord) -> Self {
        TableRow {
            record,
            features: None,
            genres: None,
        }
    }
}

/// Which label column the table carries; decides the CSV schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Mood,
    TimeWindow,
}

/// The working table for one pipeline run
#[derive(Debug)]
pub struct TrackTable {
    pub label: LabelKind,
    pub rows: Vec<TableRow>,
}

impl TrackTable {
    pub fn new(label: LabelKind) -> Self {
        TrackTable {
            label,
            rows: Vec::new(),
        }
    }

    /// Append a batch of extracted records
    pub fn stack(&mut self, records: Vec<TrackRecord>) {
        self.rows.extend(records.into_iter().map(TableRow::new));
    }

    /// Remove exact-duplicate rows (all columns equal), keeping the first
    /// occurrence. Rows that differ only in their label survive.
    pub fn dedup(&mut self) {
        let mut kept: Vec<TableRow> = Vec::with_capacity(self.rows.len());
        for row in self.rows.drain(..) {
            if !kept.contains(&row) {
                kept.push(row);
            }
        }
        self.rows = kept;
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
