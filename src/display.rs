//! Playlist display states and terminal rendering.
//!
//! [`load`] resolves a selection into a [`DisplayState`]: the built-in
//! catalog when not connected, or a Spotify search followed by a playlist
//! track fetch when connected. API failures end up as a state to render,
//! never as a panic or an early exit.

use colored::Colorize;
use tabled::Table;

use crate::{
    catalog::{self, MockPlaylist},
    selection::Selection,
    spotify::{ApiError, SpotifyClient},
    types::{Playlist, Track, TrackTableRow},
    utils,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Catalog,
    Spotify,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackView {
    pub title: String,
    pub artists: String,
    pub duration: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistView {
    pub name: String,
    pub description: String,
    pub duration: String,
    pub tracks: Vec<TrackView>,
    pub uri: Option<String>,
    pub link: Option<String>,
    pub images: Vec<String>,
    pub source: Source,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayState {
    Empty,
    Error(String),
    /// The token was missing or rejected; the user has to log in again.
    ReauthRequired(String),
    Ready(PlaylistView),
}

impl From<&MockPlaylist> for PlaylistView {
    fn from(mock: &MockPlaylist) -> Self {
        let tracks = mock
            .tracks
            .iter()
            .map(|&entry| {
                let (title, artists) = entry.split_once(" - ").unwrap_or((entry, ""));
                TrackView {
                    title: title.to_string(),
                    artists: artists.to_string(),
                    duration: None,
                    uri: None,
                }
            })
            .collect();

        PlaylistView {
            name: mock.name.to_string(),
            description: mock.description.to_string(),
            duration: mock.duration.to_string(),
            tracks,
            uri: None,
            link: None,
            images: Vec::new(),
            source: Source::Catalog,
        }
    }
}

impl PlaylistView {
    pub fn from_spotify(playlist: &Playlist, tracks: &[Track]) -> Self {
        let total_ms: u64 = tracks.iter().map(|t| t.duration_ms).sum();

        PlaylistView {
            name: playlist.name.clone(),
            description: playlist.description.clone().unwrap_or_default(),
            duration: utils::format_total_minutes(total_ms),
            tracks: tracks.iter().map(TrackView::from).collect(),
            uri: (!playlist.uri.is_empty()).then(|| playlist.uri.clone()),
            link: playlist.external_urls.spotify.clone(),
            images: playlist.image_urls(),
            source: Source::Spotify,
        }
    }
}

impl From<&Track> for TrackView {
    fn from(track: &Track) -> Self {
        TrackView {
            title: track.name.clone(),
            artists: track.artist_names(),
            duration: Some(utils::format_duration(track.duration_ms)),
            uri: Some(track.uri.clone()),
        }
    }
}

impl From<ApiError> for DisplayState {
    fn from(err: ApiError) -> Self {
        if err.is_unauthorized() {
            DisplayState::ReauthRequired(err.to_string())
        } else {
            DisplayState::Error(err.to_string())
        }
    }
}

/// Resolves what to show for a selection.
pub async fn load(selection: Selection, client: Option<&SpotifyClient>) -> DisplayState {
    match client {
        None => DisplayState::Ready(catalog::mock_playlist(selection.time, selection.mood).into()),
        Some(client) => match load_remote(client, &selection.query()).await {
            Ok(state) => state,
            Err(e) => e.into(),
        },
    }
}

async fn load_remote(client: &SpotifyClient, query: &str) -> Result<DisplayState, ApiError> {
    let playlists = client.search_playlists(query).await?;
    let Some(playlist) = playlists.first() else {
        return Ok(DisplayState::Empty);
    };

    let tracks = client.playlist_tracks(&playlist.id).await?;
    Ok(DisplayState::Ready(PlaylistView::from_spotify(playlist, &tracks)))
}

/// Renders a state for the terminal.
pub fn render(state: &DisplayState, selection: Selection) -> String {
    match state {
        DisplayState::Empty => format!(
            "No playlists found for a {} {}.",
            selection.mood.label().to_lowercase(),
            selection.time.keyword()
        ),
        DisplayState::Error(msg) => format!("{} {}", "Could not load playlist:".red().bold(), msg),
        DisplayState::ReauthRequired(msg) => format!(
            "{} {}\nRun `moodflow auth` to connect again.",
            "Spotify session expired:".yellow().bold(),
            msg
        ),
        DisplayState::Ready(view) => render_playlist(view, selection),
    }
}

fn render_playlist(view: &PlaylistView, selection: Selection) -> String {
    let theme = selection.theme();
    let mut out = String::new();

    out.push_str(&format!("{}\n", view.name.color(theme.from).bold()));
    if !view.description.is_empty() {
        out.push_str(&format!("{}\n", view.description.italic()));
    }
    out.push_str(&format!(
        "{}\n",
        format!("{} · {} tracks", view.duration, view.tracks.len()).color(theme.to)
    ));

    let rows: Vec<TrackTableRow> = view
        .tracks
        .iter()
        .enumerate()
        .map(|(i, t)| TrackTableRow {
            position: i + 1,
            title: t.title.clone(),
            artists: t.artists.clone(),
            duration: t.duration.clone().unwrap_or_else(|| "-".to_string()),
        })
        .collect();
    out.push_str(&Table::new(rows).to_string());
    out.push('\n');

    match (&view.source, &view.link) {
        (Source::Spotify, Some(link)) => out.push_str(&format!("Open in Spotify: {}\n", link)),
        (Source::Spotify, None) => {}
        (Source::Catalog, _) => out.push_str(&format!(
            "{}\n",
            "Built-in picks. Connect with `moodflow auth` for live Spotify playlists.".dimmed()
        )),
    }
    if let Some(cover) = view.images.first() {
        out.push_str(&format!("Cover: {}\n", cover.dimmed()));
    }

    out
}
