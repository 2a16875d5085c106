use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Token endpoint response, as returned by both the code exchange and the
/// refresh grant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
    #[serde(default)]
    pub obtained_at: u64,
}

fn default_expires_in() -> u64 {
    3600
}

/// Persisted login, stored as a JSON blob under the credentials key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub client_id: String,
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<u64>,
}

impl Credentials {
    /// Credentials for a pasted access token. A blank token is rejected.
    pub fn manual(client_id: String, access_token: &str) -> Option<Self> {
        let access_token = access_token.trim();
        if access_token.is_empty() {
            return None;
        }

        Some(Credentials {
            client_id,
            access_token: access_token.to_string(),
            refresh_token: None,
            expires_at: None,
        })
    }

    pub fn from_token(client_id: String, token: &Token) -> Self {
        Credentials {
            client_id,
            access_token: token.access_token.clone(),
            refresh_token: token.refresh_token.clone(),
            expires_at: Some(token.obtained_at + token.expires_in),
        }
    }
}

/// State shared between the waiting auth flow and the callback handler.
#[derive(Debug, Clone)]
pub struct PkceState {
    pub client_id: String,
    pub redirect_uri: String,
    pub token_url: String,
    pub code_verifier: String,
    pub state: String,
    pub token: Option<Token>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFlow {
    /// Authorization code with a PKCE challenge.
    Pkce,
    /// Implicit grant, the token comes back in the URL fragment.
    Implicit,
}

/// Everything needed to build an authorization URL.
#[derive(Debug, Clone)]
pub struct AuthRequest {
    pub auth_url: String,
    pub client_id: String,
    pub redirect_uri: String,
    pub scope: String,
    pub state: String,
    pub flow: AuthFlow,
    pub code_challenge: Option<String>,
}

/// What the provider sent back on the redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthResponse {
    Code(String),
    Token {
        access_token: String,
        expires_in: Option<u64>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// `None` for local files added to a playlist.
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
    pub uri: String,
    #[serde(default)]
    pub duration_ms: u64,
}

impl Track {
    pub fn artist_names(&self) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<&str>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TracksRef {
    pub total: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<Image>>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub tracks: TracksRef,
    #[serde(default)]
    pub uri: String,
}

impl Playlist {
    pub fn image_urls(&self) -> Vec<String> {
        self.images
            .iter()
            .flatten()
            .map(|image| image.url.clone())
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    // Spotify sends `null` entries for unavailable items.
    pub items: Vec<Option<T>>,
    #[serde(default)]
    pub total: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub playlists: Option<Page<Playlist>>,
    #[serde(default)]
    pub tracks: Option<Page<Track>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevicesResponse {
    pub devices: Vec<Device>,
}

/// Body of the start/resume playback call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uris: Option<Vec<String>>,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub title: String,
    pub artists: String,
    pub duration: String,
}

#[derive(Tabled)]
pub struct DeviceTableRow {
    pub name: String,
    #[tabled(rename = "type")]
    pub kind: String,
    pub id: String,
    pub active: String,
}
