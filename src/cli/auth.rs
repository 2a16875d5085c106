use std::sync::Arc;

use chrono::{TimeZone, Utc};
use tokio::sync::Mutex;

use crate::{
    config, error, info,
    management::is_expired,
    spotify,
    success,
    types::{AuthFlow, Credentials, PkceState},
    warning,
};

use super::{credentials_manager, current_session};

pub async fn auth(shared_state: Arc<Mutex<Option<PkceState>>>, implicit: bool, no_callback: bool) {
    let Some(client_id) = config::spotify_client_id() else {
        error!("SPOTIFY_API_AUTH_CLIENT_ID is not set. Create an app at developer.spotify.com and add its client id to your .env file.");
    };

    let flow = if implicit {
        AuthFlow::Implicit
    } else {
        AuthFlow::Pkce
    };

    let mut manager = credentials_manager();
    if let Err(e) = spotify::auth::auth(shared_state, &mut manager, client_id, flow, !no_callback).await {
        warning!("Authorization could not be started: {}", e);
    }
}

pub async fn login(redirect_url: Option<String>, token: Option<String>) {
    let mut manager = credentials_manager();

    if let Some(token) = token {
        let client_id = config::spotify_client_id().unwrap_or_default();
        let Some(credentials) = Credentials::manual(client_id, &token) else {
            error!("The access token is empty.");
        };
        match manager.set_credentials(credentials).await {
            Ok(_) => success!("Connected to Spotify with the provided access token."),
            Err(e) => error!("Failed to save credentials: {}", e),
        }
        return;
    }

    let Some(redirect_url) = redirect_url else {
        error!("Provide either --redirect-url or --token.");
    };

    let Some(client_id) = config::spotify_client_id() else {
        error!("SPOTIFY_API_AUTH_CLIENT_ID is not set.");
    };

    match spotify::auth::complete_from_redirect(&mut manager, &client_id, &redirect_url).await {
        Ok(_) => success!("Connected to Spotify."),
        Err(e) => warning!("Login failed: {}", e),
    }
}

pub async fn logout() {
    let mut manager = credentials_manager();
    match manager.clear_credentials().await {
        Ok(_) => success!("Disconnected from Spotify."),
        Err(e) => error!("Failed to clear credentials: {}", e),
    }
}

pub async fn status() {
    let Some(session) = current_session(None).await else {
        info!("Not connected to Spotify. Run `moodflow auth` to connect.");
        return;
    };

    success!("Connected to Spotify");
    if !session.credentials.client_id.is_empty() {
        info!("Client ID: {}", session.credentials.client_id);
    }

    match session.credentials.expires_at {
        Some(expires_at) => {
            let when = Utc
                .timestamp_opt(expires_at as i64, 0)
                .single()
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|| expires_at.to_string());
            if is_expired(&session.credentials) {
                warning!("Access token expired at {}", when);
            } else {
                info!("Access token valid until {}", when);
            }
        }
        None => info!("Access token expiry unknown"),
    }

    match session.device_id {
        Some(device) => info!("Playback device: {}", device),
        None => info!("Playback device: active device"),
    }
}
