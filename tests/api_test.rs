use std::collections::HashMap;

use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::{get, put},
};
use moodflow::display::{self, DisplayState, Source};
use moodflow::selection::{Mood, Selection, TimeOfDay};
use moodflow::spotify::{ApiError, SpotifyClient};
use moodflow::types::PlayRequest;
use serde_json::{Value, json};

// Helper function to serve a stand-in Spotify API on a random local port
async fn spawn_api(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn selection() -> Selection {
    Selection::new(TimeOfDay::Morning, Mood::Happy)
}

async fn search(Query(params): Query<HashMap<String, String>>) -> (StatusCode, Json<Value>) {
    match params.get("type").map(String::as_str) {
        Some("playlist") => (
            StatusCode::OK,
            Json(json!({
                "playlists": {
                    "items": [
                        null,
                        {
                            "id": "pl1",
                            "name": "Happy Morning Mix",
                            "description": "Wake up smiling",
                            "images": [{ "url": "https://img/1.jpg" }],
                            "external_urls": { "spotify": "https://open.spotify.com/playlist/pl1" },
                            "tracks": { "total": 2 },
                            "uri": "spotify:playlist:pl1"
                        }
                    ],
                    "total": 2
                }
            })),
        ),
        Some("track") => (
            StatusCode::OK,
            Json(json!({
                "tracks": {
                    "items": [{
                        "id": "t9",
                        "name": "Here Comes the Sun",
                        "artists": [{ "name": "The Beatles" }],
                        "uri": "spotify:track:t9",
                        "duration_ms": 185000
                    }]
                }
            })),
        ),
        _ => (StatusCode::BAD_REQUEST, Json(json!({ "error": { "status": 400, "message": "bad type" } }))),
    }
}

async fn playlist_tracks(
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    assert_eq!(id, "pl1");
    assert_eq!(params.get("limit").map(String::as_str), Some("10"));
    (
        StatusCode::OK,
        Json(json!({
            "items": [
                { "track": {
                    "id": "t1",
                    "name": "Happy",
                    "artists": [{ "name": "Pharrell Williams" }],
                    "uri": "spotify:track:t1",
                    "duration_ms": 233000
                } },
                { "track": null },
                { "track": {
                    "id": null,
                    "name": "Kitchen Demo",
                    "artists": [{ "name": "" }],
                    "uri": "spotify:local:::Kitchen+Demo:95",
                    "duration_ms": 95000,
                    "is_local": true
                } },
                { "track": {
                    "id": "t2",
                    "name": "Good as Hell",
                    "artists": [{ "name": "Lizzo" }, { "name": "Ariana Grande" }],
                    "uri": "spotify:track:t2",
                    "duration_ms": 159000
                } }
            ]
        })),
    )
}

fn healthy_api() -> Router {
    Router::new()
        .route("/search", get(search))
        .route("/playlists/{id}/tracks", get(playlist_tracks))
        .route("/me/player/pause", put(|| async { StatusCode::NO_CONTENT }))
        .route(
            "/me/player/play",
            put(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": { "status": 404, "message": "Player command failed: No active device found" } })),
                )
            }),
        )
        .route(
            "/me/player/devices",
            get(|| async {
                Json(json!({ "devices": [
                    { "id": "d1", "name": "Laptop", "type": "Computer", "is_active": true },
                    { "id": null, "name": "Speaker", "type": "Speaker", "is_active": false }
                ] }))
            }),
        )
}

#[tokio::test]
async fn test_search_playlists_skips_null_items() {
    let base = spawn_api(healthy_api()).await;
    let client = SpotifyClient::with_base_url(base, "token".to_string());

    let playlists = client.search_playlists("happy morning").await.unwrap();
    assert_eq!(playlists.len(), 1);
    assert_eq!(playlists[0].id, "pl1");
    assert_eq!(playlists[0].image_urls(), vec!["https://img/1.jpg".to_string()]);
}

#[tokio::test]
async fn test_search_tracks() {
    let base = spawn_api(healthy_api()).await;
    let client = SpotifyClient::with_base_url(base, "token".to_string());

    let tracks = client.search_tracks("sun").await.unwrap();
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].artist_names(), "The Beatles");
}

#[tokio::test]
async fn test_load_ready_from_spotify() {
    let base = spawn_api(healthy_api()).await;
    let client = SpotifyClient::with_base_url(format!("{}/", base), "token".to_string());

    let DisplayState::Ready(view) = display::load(selection(), Some(&client)).await else {
        panic!("expected a ready state");
    };

    assert_eq!(view.name, "Happy Morning Mix");
    assert_eq!(view.source, Source::Spotify);
    assert_eq!(view.uri.as_deref(), Some("spotify:playlist:pl1"));
    assert_eq!(view.tracks.len(), 3);
    assert_eq!(view.tracks[1].title, "Kitchen Demo");
    assert_eq!(view.tracks[1].uri.as_deref(), Some("spotify:local:::Kitchen+Demo:95"));
    assert_eq!(view.tracks[2].artists, "Lizzo, Ariana Grande");
    assert_eq!(view.tracks[0].duration.as_deref(), Some("3:53"));
    assert_eq!(view.duration, "8 min");

    let rendered = display::render(&DisplayState::Ready(view), selection());
    assert!(rendered.contains("Good as Hell"));
    assert!(rendered.contains("https://open.spotify.com/playlist/pl1"));
    assert!(rendered.contains("https://img/1.jpg"));
}

#[tokio::test]
async fn test_load_without_client_uses_catalog() {
    let DisplayState::Ready(view) = display::load(selection(), None).await else {
        panic!("expected a ready state");
    };
    assert_eq!(view.name, "Morning Energy Boost");
    assert_eq!(view.source, Source::Catalog);
}

#[tokio::test]
async fn test_unauthorized_requires_login() {
    let app = Router::new().route(
        "/search",
        get(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": { "status": 401, "message": "The access token expired" } })),
            )
        }),
    );
    let base = spawn_api(app).await;
    let client = SpotifyClient::with_base_url(base, "expired".to_string());

    let err = client.search_playlists("x").await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized(status) if status == StatusCode::UNAUTHORIZED));

    let state = display::load(selection(), Some(&client)).await;
    assert!(matches!(state, DisplayState::ReauthRequired(_)));
    assert!(display::render(&state, selection()).contains("moodflow auth"));
}

#[tokio::test]
async fn test_forbidden_requires_login() {
    let app = Router::new().route("/search", get(|| async { StatusCode::FORBIDDEN }));
    let base = spawn_api(app).await;
    let client = SpotifyClient::with_base_url(base, "token".to_string());

    let state = display::load(selection(), Some(&client)).await;
    assert!(matches!(state, DisplayState::ReauthRequired(_)));
}

#[tokio::test]
async fn test_server_error_is_an_error_state() {
    let app = Router::new().route(
        "/search",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": { "status": 500, "message": "Server error" } })),
            )
        }),
    );
    let base = spawn_api(app).await;
    let client = SpotifyClient::with_base_url(base, "token".to_string());

    let state = display::load(selection(), Some(&client)).await;
    let DisplayState::Error(message) = &state else {
        panic!("expected an error state, got {:?}", state);
    };
    assert!(message.contains("500"));
    assert!(message.contains("Server error"));
    assert!(display::render(&state, selection()).contains("Could not load playlist"));
}

#[tokio::test]
async fn test_malformed_body_is_an_error_state() {
    let app = Router::new().route("/search", get(|| async { "definitely not json" }));
    let base = spawn_api(app).await;
    let client = SpotifyClient::with_base_url(base, "token".to_string());

    let state = display::load(selection(), Some(&client)).await;
    assert!(matches!(state, DisplayState::Error(_)));
}

#[tokio::test]
async fn test_unreachable_api_is_an_error_state() {
    // Bind and drop to get a port nobody listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = SpotifyClient::with_base_url(format!("http://{}", addr), "token".to_string());
    let state = display::load(selection(), Some(&client)).await;
    assert!(matches!(state, DisplayState::Error(_)));
}

#[tokio::test]
async fn test_empty_search_is_empty_state() {
    let app = Router::new().route(
        "/search",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            assert_eq!(params.get("q").map(String::as_str), Some("happy morning"));
            Json(json!({ "playlists": { "items": [], "total": 0 } }))
        }),
    );
    let base = spawn_api(app).await;
    let client = SpotifyClient::with_base_url(base, "token".to_string());

    let state = display::load(selection(), Some(&client)).await;
    assert_eq!(state, DisplayState::Empty);
    assert!(display::render(&state, selection()).contains("No playlists found"));
}

#[tokio::test]
async fn test_playback_calls() {
    let base = spawn_api(healthy_api()).await;
    let client = SpotifyClient::with_base_url(base, "token".to_string());

    client.pause(Some("d1")).await.unwrap();

    let request = PlayRequest {
        context_uri: Some("spotify:playlist:pl1".to_string()),
        uris: None,
    };
    let err = client.play(None, &request).await.unwrap_err();
    match err {
        ApiError::Status(status, message) => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert!(message.contains("No active device"));
        }
        other => panic!("unexpected error {:?}", other),
    }

    let devices = client.devices().await.unwrap();
    assert_eq!(devices.len(), 2);
    assert!(devices[0].is_active);
    assert_eq!(devices[1].id, None);
}
