//! Configuration management for MoodFlow.
//!
//! Configuration values come from environment variables and an optional
//! `.env` file. Lookups follow a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)
//!
//! Only the client id has no default; every other value falls back to the
//! public Spotify endpoints and a loopback callback address.

use std::{env, path::PathBuf};

pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8888/callback";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";
pub const DEFAULT_SCOPE: &str = "playlist-read-private playlist-read-collaborative user-read-private user-read-playback-state user-modify-playback-state";

/// Returns the application directory inside the platform data directory.
///
/// `MOODFLOW_DATA_DIR` replaces the whole path when set, which is how tests
/// and portable installs keep their state apart.
///
/// - Linux: `~/.local/share/moodflow`
/// - macOS: `~/Library/Application Support/moodflow`
/// - Windows: `%LOCALAPPDATA%/moodflow`
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = env::var("MOODFLOW_DATA_DIR") {
        return PathBuf::from(dir);
    }

    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("moodflow");
    path
}

/// Loads environment variables from a `.env` file in the data directory.
///
/// Creates the directory when it is missing. A missing `.env` file is fine,
/// every setting can also come from the process environment or a default.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let dir = data_dir();
    async_fs::create_dir_all(&dir)
        .await
        .map_err(|e| e.to_string())?;

    let path = dir.join(".env");
    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Returns the address the local OAuth callback server binds to.
pub fn server_addr() -> String {
    var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Returns the Spotify client id, if configured.
///
/// The client id is the only value without a default: it identifies the
/// user's own Spotify application.
pub fn spotify_client_id() -> Option<String> {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID")
        .ok()
        .filter(|value| !value.trim().is_empty())
}

/// Returns the OAuth redirect URI registered with the Spotify application.
pub fn spotify_redirect_uri() -> String {
    var_or("SPOTIFY_API_REDIRECT_URI", DEFAULT_REDIRECT_URI)
}

/// Returns the space separated scope list requested during authorization.
pub fn spotify_scope() -> String {
    var_or("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE)
}

/// Returns the Spotify OAuth authorization URL.
pub fn spotify_apiauth_url() -> String {
    var_or("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL)
}

/// Returns the Spotify Web API base URL.
pub fn spotify_apiurl() -> String {
    var_or("SPOTIFY_API_URL", DEFAULT_API_URL)
}

/// Returns the Spotify OAuth token exchange URL.
pub fn spotify_apitoken_url() -> String {
    var_or("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)
}

/// Returns the default playback device, if configured.
pub fn spotify_device_id() -> Option<String> {
    env::var("SPOTIFY_DEVICE_ID")
        .ok()
        .filter(|value| !value.trim().is_empty())
}
