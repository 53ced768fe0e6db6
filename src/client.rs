use anyhow::Result;
use ureq::Agent;
use urlencoding::encode;

use crate::auth::{self, Token};
use crate::config::Config;
use crate::dataset::TimeRange;
use crate::models::{
    ArtistProfile, AudioFeatures, PlaylistEntry, PlaylistItemsResponse, PlaylistRef,
    SearchResponse, TopTracksResponse, TrackObject,
};

const API_BASE: &str = "https://api.spotify.com/v1";

/// The Web API operations the dataset pipelines depend on
#[cfg_attr(test, mockall::automock)]
pub trait SpotifyApi {
    /// Search playlists by keyword; first page of results only
    fn search_playlists(&self, query: &str) -> Result<Vec<PlaylistRef>>;

    /// List the membership items of a playlist
    fn playlist_items(&self, playlist_id: &str) -> Result<Vec<PlaylistEntry>>;

    /// Audio features for a single track; Ok(None) when the service has
    /// no feature vector for it
    fn audio_features(&self, track_id: &str) -> Result<Option<AudioFeatures>>;

    /// Full artist resource by id
    fn artist(&self, artist_id: &str) -> Result<ArtistProfile>;

    /// The authorized user's top tracks for one time window
    fn top_tracks(&self, time_range: TimeRange, limit: u32) -> Result<Vec<TrackObject>>;
}

/// A Spotify Web API client bound to one authorization context. Each
/// context gets its own client; a client's token is never swapped out.
pub struct SpotifyClient {
    agent: Agent,
    token: Token,
}

impl SpotifyClient {
    /// Client for application-only endpoints (search, listing, features)
    pub fn with_app_credentials(config: &Config) -> Result<Self> {
        let agent = Agent::new();
        let token = auth::client_credentials_token(&agent, config)?;
        Ok(SpotifyClient { agent, token })
    }

    /// Client for user-delegated endpoints; walks the authorization code
    /// flow for the given scopes
    pub fn with_user_authorization(config: &Config, scopes: &[&str]) -> Result<Self> {
        let agent = Agent::new();
        let token = auth::authorization_code_token(&agent, config, scopes)?;
        Ok(SpotifyClient { agent, token })
    }

    fn bearer_header(&self) -> String {
        format!("Bearer {}", self.token.access_token)
    }

    fn ensure_token(&self) -> Result<()> {
        if self.token.is_expired() {
            return Err(anyhow::anyhow!(
                "Access token expired; restart the run to re-authorize"
            ));
        }
        Ok(())
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.ensure_token()?;

        let response = self
            .agent
            .get(url)
            .set("Authorization", &self.bearer_header())
            .call()
            .map_err(|e| anyhow::anyhow!("HTTP request failed: {e}"))?;

        let response_text = response.into_string()?;
        serde_json::from_str(&response_text)
            .map_err(|e| anyhow::anyhow!("Failed to parse JSON response: {e}"))
    }
}

impl SpotifyApi for SpotifyClient {
    fn search_playlists(&self, query: &str) -> Result<Vec<PlaylistRef>> {
        let url = format!("{API_BASE}/search?q={}&type=playlist", encode(query));
        let response: SearchResponse = self.get_json(&url)?;
        Ok(response.playlists.items.into_iter().flatten().collect())
    }

    fn playlist_items(&self, playlist_id: &str) -> Result<Vec<PlaylistEntry>> {
        let url = format!("{API_BASE}/playlists/{}/tracks", encode(playlist_id));
        let response: PlaylistItemsResponse = self.get_json(&url)?;
        Ok(response.items)
    }

    fn audio_features(&self, track_id: &str) -> Result<Option<AudioFeatures>> {
        self.ensure_token()?;

        let url = format!("{API_BASE}/audio-features/{}", encode(track_id));
        let response = match self
            .agent
            .get(&url)
            .set("Authorization", &self.bearer_header())
            .call()
        {
            Ok(response) => response,
            // Some tracks have no feature vector; the endpoint answers 404
            Err(ureq::Error::Status(404, _)) => return Ok(None),
            Err(e) => return Err(anyhow::anyhow!("HTTP request failed: {e}")),
        };

        let response_text = response.into_string()?;
        if response_text.trim().is_empty() || response_text.trim() == "null" {
            return Ok(None);
        }
        let features: AudioFeatures = serde_json::from_str(&response_text)
            .map_err(|e| anyhow::anyhow!("Failed to parse audio features: {e}"))?;
        Ok(Some(features))
    }

    fn artist(&self, artist_id: &str) -> Result<ArtistProfile> {
        let url = format!("{API_BASE}/artists/{}", encode(artist_id));
        self.get_json(&url)
    }

    fn top_tracks(&self, time_range: TimeRange, limit: u32) -> Result<Vec<TrackObject>> {
        let url = format!(
            "{API_BASE}/me/top/tracks?limit={limit}&time_range={}",
            time_range.as_str()
        );
        let response: TopTracksResponse = self.get_json(&url)?;
        Ok(response.items)
    }
}
