use clap::ValueEnum;
use tabled::Table;

use crate::{
    display::{self, DisplayState},
    info,
    selection::Selection,
    success,
    types::{PlayRequest, TrackTableRow},
    utils, warning,
};

use super::{current_session, require_session, spinner};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchKind {
    Track,
    Playlist,
}

/// Shows the playlist for a selection, optionally starting it.
pub async fn playlist(selection: Selection, offline: bool, play: bool, device: Option<String>) {
    let session = if offline {
        None
    } else {
        current_session(device).await
    };
    let client = session.as_ref().map(|s| s.client());

    println!("{}\n", selection.time.prompt());

    let state = match &client {
        Some(client) => {
            let pb = spinner("Searching Spotify...");
            let state = display::load(selection, Some(client)).await;
            pb.finish_and_clear();
            state
        }
        None => display::load(selection, None).await,
    };

    println!("{}", display::render(&state, selection));

    if !play {
        return;
    }

    let (Some(client), Some(session)) = (&client, &session) else {
        warning!("Playback needs a Spotify connection. Run `moodflow auth` first.");
        return;
    };

    let DisplayState::Ready(view) = &state else {
        return;
    };

    let request = match &view.uri {
        Some(uri) => PlayRequest {
            context_uri: Some(uri.clone()),
            uris: None,
        },
        None => PlayRequest {
            context_uri: None,
            uris: Some(view.tracks.iter().filter_map(|t| t.uri.clone()).collect()),
        },
    };

    match client.play(session.device_id.as_deref(), &request).await {
        Ok(_) => success!("Playing {}", view.name),
        Err(e) if e.is_unauthorized() => {
            warning!("{}. Run `moodflow auth` to connect again.", e)
        }
        Err(e) => warning!("Could not start playback: {}", e),
    }
}

/// Free-text search, first page only.
pub async fn search(query: String, kind: SearchKind) {
    let session = require_session(None).await;
    let client = session.client();

    let pb = spinner("Searching Spotify...");
    match kind {
        SearchKind::Track => {
            let result = client.search_tracks(&query).await;
            pb.finish_and_clear();
            match result {
                Ok(tracks) if tracks.is_empty() => info!("No tracks found for '{}'.", query),
                Ok(tracks) => {
                    let rows: Vec<TrackTableRow> = tracks
                        .iter()
                        .enumerate()
                        .map(|(i, t)| TrackTableRow {
                            position: i + 1,
                            title: t.name.clone(),
                            artists: t.artist_names(),
                            duration: utils::format_duration(t.duration_ms),
                        })
                        .collect();
                    println!("{}", Table::new(rows));
                }
                Err(e) => println!("{}", display::render(&DisplayState::from(e), Selection::default())),
            }
        }
        SearchKind::Playlist => {
            let result = client.search_playlists(&query).await;
            pb.finish_and_clear();
            match result {
                Ok(playlists) if playlists.is_empty() => {
                    info!("No playlists found for '{}'.", query)
                }
                Ok(playlists) => {
                    for p in playlists {
                        println!("{}  {} ({} tracks)", p.id, p.name, p.tracks.total);
                    }
                }
                Err(e) => println!("{}", display::render(&DisplayState::from(e), Selection::default())),
            }
        }
    }
}
