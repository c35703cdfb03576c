//! Configuration management for Chart Bridge.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Both binaries read their settings here: the server
//! needs Spotify API credentials and endpoints, the chart page location and the
//! session secret; the client only needs to know where the server lives.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory
//! 4. Application defaults
//!
//! Unlike the API endpoints, Spotify credentials have no default. Without them
//! the chart routes keep working and the authentication routes answer 503.

use std::{env, path::PathBuf, time::Duration};

use crate::utils;

/// Loads environment variables from `.env` files.
///
/// Looks for `chartbridge/.env` in the platform-specific local data directory
/// first, then for `.env` in the working directory. Variables already present in
/// the process environment are never overwritten, and a missing file is not an
/// error.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/chartbridge/.env`
/// - macOS: `~/Library/Application Support/chartbridge/.env`
/// - Windows: `%LOCALAPPDATA%/chartbridge/.env`
pub fn load_env() {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("chartbridge/.env");
    if path.is_file() {
        let _ = dotenv::from_path(&path);
    }

    let _ = dotenv::dotenv();
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Address the HTTP service binds to, e.g. `127.0.0.1:5000`.
pub fn server_addr() -> String {
    var("SERVER_ADDRESS").unwrap_or_else(|| "127.0.0.1:5000".to_string())
}

/// Base URL the CLI client uses to reach the HTTP service.
pub fn bridge_url() -> String {
    var("CHARTBRIDGE_URL").unwrap_or_else(|| "http://localhost:5000".to_string())
}

/// Spotify application client ID, if configured.
pub fn spotify_client_id() -> Option<String> {
    var("SPOTIFY_CLIENT_ID")
}

/// Spotify application client secret, if configured.
///
/// The secret should never show up in logs.
pub fn spotify_client_secret() -> Option<String> {
    var("SPOTIFY_CLIENT_SECRET")
}

/// OAuth redirect URI; must match the one registered with Spotify.
pub fn spotify_redirect_uri() -> String {
    var("SPOTIFY_REDIRECT_URI").unwrap_or_else(|| "http://localhost:5000/callback".to_string())
}

/// Spotify OAuth authorization URL.
pub fn spotify_apiauth_url() -> String {
    var("SPOTIFY_API_AUTH_URL")
        .unwrap_or_else(|| "https://accounts.spotify.com/authorize".to_string())
}

/// Spotify OAuth token exchange URL.
pub fn spotify_apitoken_url() -> String {
    var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|| "https://accounts.spotify.com/api/token".to_string())
}

/// Spotify Web API base URL.
pub fn spotify_apiurl() -> String {
    var("SPOTIFY_API_URL").unwrap_or_else(|| "https://api.spotify.com/v1".to_string())
}

/// Base URL of the chart page; a date segment is appended for past weeks.
pub fn chart_url() -> String {
    var("CHART_URL").unwrap_or_else(|| "https://www.billboard.com/charts/hot-100".to_string())
}

/// Secret used to sign session cookies.
pub fn session_secret() -> Option<String> {
    var("SESSION_SECRET")
}

/// Number of catalog searches allowed per second.
pub fn search_rate_per_second() -> u32 {
    var("SEARCH_RATE_PER_SECOND")
        .and_then(|v| v.parse::<u32>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(10)
}

/// Timeout applied to every outbound HTTP request.
pub fn http_timeout() -> Duration {
    let secs = var("HTTP_TIMEOUT_SECS")
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(30);
    Duration::from_secs(secs)
}

/// Spotify application credentials.
#[derive(Debug, Clone)]
pub struct SpotifyCredentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Snapshot of everything the HTTP service needs, taken once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server_addr: String,
    pub credentials: Option<SpotifyCredentials>,
    pub redirect_uri: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
    pub chart_url: String,
    pub session_secret: String,
    pub search_rate_per_second: u32,
    pub http_timeout: Duration,
}

impl Settings {
    /// Reads the current environment.
    ///
    /// A missing `SESSION_SECRET` is replaced by a random one, which means
    /// sessions do not survive a restart.
    pub fn from_env() -> Self {
        let credentials = match (spotify_client_id(), spotify_client_secret()) {
            (Some(client_id), Some(client_secret)) => Some(SpotifyCredentials {
                client_id,
                client_secret,
            }),
            _ => {
                tracing::warn!(
                    "SPOTIFY_CLIENT_ID/SPOTIFY_CLIENT_SECRET not set, authentication is disabled"
                );
                None
            }
        };

        let session_secret = session_secret().unwrap_or_else(|| {
            tracing::warn!("SESSION_SECRET not set, using a random secret for this process");
            utils::generate_token(64)
        });

        Self {
            server_addr: server_addr(),
            credentials,
            redirect_uri: spotify_redirect_uri(),
            auth_url: spotify_apiauth_url(),
            token_url: spotify_apitoken_url(),
            api_url: spotify_apiurl(),
            chart_url: chart_url(),
            session_secret,
            search_rate_per_second: search_rate_per_second(),
            http_timeout: http_timeout(),
        }
    }
}
