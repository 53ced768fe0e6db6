use anyhow::Result;

/// Redirect URI registered for the application in the developer dashboard
const REDIRECT_URI: &str = "https://accounts.spotify.com/authorize/";

/// Configuration for both authorization flows, loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub username: String,
}

/// Load configuration from `.env` and environment
pub fn load_config() -> Result<Config> {
    // Load `.env` file if present
    dotenv::dotenv().ok();
    // Read variables
    let client_id = std::env::var("SPOTIFY_CLIENT_ID")?;
    let client_secret = std::env::var("SPOTIFY_CLIENT_SECRET")?;
    let username =
        std::env::var("SPOTIFY_USERNAME").unwrap_or_else(|_| "spotify-user".to_string());
    Ok(Config {
        client_id,
        client_secret,
        redirect_uri: REDIRECT_URI.to_string(),
        username,
    })
}
