use std::io::{self, Write};

use anyhow::{Context, Result};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::Deserialize;
use ureq::Agent;
use urlencoding::encode;

use crate::config::Config;

const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const AUTHORIZE_URL: &str = "https://accounts.spotify.com/authorize";

/// Scopes required to read the user's top items
pub const USER_SCOPES: [&str; 2] = ["user-top-read", "user-library-read"];

/// An access token for one authorization context
#[derive(Debug, Clone)]
pub struct Token {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

impl Token {
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

fn basic_auth_header(config: &Config) -> String {
    let credentials = format!("{}:{}", config.client_id, config.client_secret);
    format!("Basic {}", STANDARD.encode(credentials))
}

fn token_from_response(response: TokenResponse) -> Token {
    Token {
        access_token: response.access_token,
        expires_at: Utc::now() + Duration::seconds(response.expires_in),
    }
}

/// Fetch an application-only token via the client credentials flow
pub fn client_credentials_token(agent: &Agent, config: &Config) -> Result<Token> {
    let response = agent
        .post(TOKEN_URL)
        .set("Authorization", &basic_auth_header(config))
        .send_form(&[("grant_type", "client_credentials")])
        .map_err(|e| anyhow::anyhow!("Token request failed: {e}"))?;

    let response_text = response.into_string()?;
    let parsed: TokenResponse =
        serde_json::from_str(&response_text).context("Failed to parse token response")?;

    Ok(token_from_response(parsed))
}

/// Walk the authorization code flow for the given scopes. Prints the
/// authorize URL and reads the redirected URL back from stdin, then
/// exchanges the embedded code for an access token.
pub fn authorization_code_token(agent: &Agent, config: &Config, scopes: &[&str]) -> Result<Token> {
    let state = random_state();
    let authorize_url = build_authorize_url(config, scopes, &state);

    println!(
        "Open the following URL in a browser and authorize as {}:",
        config.username
    );
    println!("{authorize_url}");
    print!("Paste the URL you were redirected to: ");
    io::stdout().flush()?;

    let mut redirected = String::new();
    io::stdin().read_line(&mut redirected)?;
    let redirected = redirected.trim();

    let code = extract_query_param(redirected, "code")
        .ok_or_else(|| anyhow::anyhow!("No authorization code found in the pasted URL"))?;
    if let Some(returned_state) = extract_query_param(redirected, "state") {
        if returned_state != state {
            return Err(anyhow::anyhow!("State mismatch in authorization response"));
        }
    }

    let response = agent
        .post(TOKEN_URL)
        .set("Authorization", &basic_auth_header(config))
        .send_form(&[
            ("grant_type", "authorization_code"),
            ("code", &code),
            ("redirect_uri", &config.redirect_uri),
        ])
        .map_err(|e| anyhow::anyhow!("Code exchange failed: {e}"))?;

    let response_text = response.into_string()?;
    let parsed: TokenResponse =
        serde_json::from_str(&response_text).context("Failed to parse token response")?;

    Ok(token_from_response(parsed))
}

/// Build the URL the user must visit to grant the requested scopes
fn build_authorize_url(config: &Config, scopes: &[&str], state: &str) -> String {
    format!(
        "{AUTHORIZE_URL}?client_id={}&response_type=code&redirect_uri={}&scope={}&state={}",
        encode(&config.client_id),
        encode(&config.redirect_uri),
        encode(&scopes.join(" ")),
        state
    )
}

fn random_state() -> String {
    let mut rng = rand::thread_rng();
    (0..16)
        .map(|_| rng.sample(rand::distributions::Alphanumeric) as char)
        .collect()
}

/// Pull a single query parameter out of a pasted redirect URL
fn extract_query_param(url: &str, name: &str) -> Option<String> {
    let query = url.split_once('?')?.1;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_query_param() {
        let url = "https://accounts.spotify.com/authorize/?code=AQBx123&state=abcdef";
        assert_eq!(
            extract_query_param(url, "code"),
            Some("AQBx123".to_string())
        );
        assert_eq!(
            extract_query_param(url, "state"),
            Some("abcdef".to_string())
        );
        assert_eq!(extract_query_param(url, "missing"), None);
        assert_eq!(extract_query_param("https://no-query.example/", "code"), None);
    }

    #[test]
    fn test_authorize_url_carries_scopes_and_state() {
        let config = Config {
            client_id: "id".to_string(),
            client_secret: "secret".to_string(),
            redirect_uri: "https://accounts.spotify.com/authorize/".to_string(),
            username: "tester".to_string(),
        };
        let url = build_authorize_url(&config, &USER_SCOPES, "st4te");
        assert!(url.starts_with("https://accounts.spotify.com/authorize?"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("user-top-read%20user-library-read"));
        assert!(url.contains("state=st4te"));
    }

    #[test]
    fn test_expired_token() {
        let expired = Token {
            access_token: "t".to_string(),
            expires_at: Utc::now() - Duration::seconds(1),
        };
        let fresh = Token {
            access_token: "t".to_string(),
            expires_at: Utc::now() + Duration::seconds(3600),
        };
        assert!(expired.is_expired());
        assert!(!fresh.is_expired());
    }
}
