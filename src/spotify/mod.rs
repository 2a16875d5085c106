//! # Spotify Integration Module
//!
//! Thin client for the handful of Spotify Web API calls MoodFlow needs,
//! plus the OAuth flow that produces the bearer token.
//!
//! ```text
//! CLI commands
//!      ↓
//! SpotifyClient (search, playlist tracks, playback, devices)
//!      ↓
//! reqwest + JSON
//!      ↓
//! Spotify Web API
//! ```
//!
//! ## Modules
//!
//! - [`auth`] - Authorization URL, PKCE code exchange, token refresh and the
//!   interactive login flow
//! - [`search`] - Playlist and track search, playlist tracks
//! - [`playback`] - Start/pause playback and device listing
//!
//! ## Error Handling
//!
//! Every non-2xx response becomes an [`ApiError`]. 401 and 403 map to
//! [`ApiError::Unauthorized`] so callers can ask the user to log in again.
//! There is no retry and no rate-limit handling: one call, one answer.
//! Result pages are fixed to [`PAGE_SIZE`] items.

use std::fmt;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config;

pub mod auth;
pub mod playback;
pub mod search;

pub const PAGE_SIZE: u32 = 10;

#[derive(Debug)]
pub enum ApiError {
    /// 401/403, the token was rejected.
    Unauthorized(StatusCode),
    /// Any other non-2xx answer.
    Status(StatusCode, String),
    /// Transport or decoding failure.
    Http(reqwest::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Http(err)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized(status) => {
                write!(f, "Spotify rejected the access token ({})", status)
            }
            ApiError::Status(status, body) if body.is_empty() => {
                write!(f, "Spotify request failed ({})", status)
            }
            ApiError::Status(status, body) => {
                write!(f, "Spotify request failed ({}): {}", status, body)
            }
            ApiError::Http(e) => write!(f, "Spotify request failed: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}

/// Bearer-authenticated Spotify Web API client.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    token: String,
}

impl SpotifyClient {
    /// Client against the configured API base URL.
    pub fn new(token: String) -> Self {
        Self::with_base_url(config::spotify_apiurl(), token)
    }

    pub fn with_base_url(api_url: impl Into<String>, token: String) -> Self {
        SpotifyClient {
            http: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(self.url(path)).bearer_auth(&self.token)
    }

    fn put(&self, path: &str) -> RequestBuilder {
        self.http.put(self.url(path)).bearer_auth(&self.token)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = check_status(request.send().await?).await?;
        Ok(response.json::<T>().await?)
    }

    async fn send_empty(&self, request: RequestBuilder) -> Result<(), ApiError> {
        check_status(request.send().await?).await?;
        Ok(())
    }
}

/// Turns non-2xx responses into errors.
pub(crate) async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ApiError::Unauthorized(status));
    }

    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status(status, error_message(&body)))
}

// Spotify wraps errors as {"error": {"status": 404, "message": "..."}}.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json["error"]["message"]
                .as_str()
                .or_else(|| json["error_description"].as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}
