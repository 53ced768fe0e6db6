use serde::Deserialize;

/// Response structure for playlist search
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub playlists: PlaylistPage,
}

/// The search endpoint occasionally returns null entries in the items
/// array; they are dropped when the page is unwrapped
#[derive(Debug, Deserialize)]
pub struct PlaylistPage {
    pub items: Vec<Option<PlaylistRef>>,
}

/// A playlist as returned by search; only the id is consumed downstream
#[derive(Debug, Clone, Deserialize)]
#[allow(dead_code)]
pub struct PlaylistRef {
    pub id: String,
    pub name: Option<String>,
}

/// Response structure for playlist membership listing
#[derive(Debug, Deserialize)]
pub struct PlaylistItemsResponse {
    pub items: Vec<PlaylistEntry>,
}

/// One playlist membership item. The track object is null for removed or
/// regionally unavailable entries.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistEntry {
    pub track: Option<TrackObject>,
}

/// A full track object, the shape shared by playlist entries and top-item
/// results. Fields the upstream can null out (local tracks carry no id)
/// stay optional so extraction can skip the item instead of failing the
/// whole page.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackObject {
    pub name: Option<String>,
    pub id: Option<String>,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    pub album: Option<AlbumRef>,
    pub popularity: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistRef {
    pub name: Option<String>,
    pub id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumRef {
    pub name: Option<String>,
    pub id: Option<String>,
}

/// Response structure for the user's top tracks; items are track objects
/// directly, with no intermediate wrapper
#[derive(Debug, Deserialize)]
pub struct TopTracksResponse {
    pub items: Vec<TrackObject>,
}

/// Numeric audio descriptors for one track. The service's own `id` field
/// is renamed on arrival to match the table's join key; the `uri`,
/// `track_href` and `analysis_url` fields are not declared and are
/// dropped by the deserializer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AudioFeatures {
    #[serde(rename = "id")]
    pub track_id: String,
    pub danceability: f64,
    pub energy: f64,
    pub key: i32,
    pub loudness: f64,
    pub mode: i32,
    pub speechiness: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub valence: f64,
    pub tempo: f64,
    pub duration_ms: u64,
    pub time_signature: i32,
}

/// Full artist resource; only the genre tags are consumed
#[derive(Debug, Clone, Deserialize)]
#[allow(dead_code)]
pub struct ArtistProfile {
    pub name: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
}
