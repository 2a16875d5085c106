use tabled::Table;

use crate::{
    spotify::ApiError,
    success,
    types::{DeviceTableRow, PlayRequest},
    warning,
};

use super::require_session;

fn report(err: ApiError) {
    if err.is_unauthorized() {
        warning!("{}. Run `moodflow auth` to connect again.", err);
    } else {
        warning!("{}", err);
    }
}

/// Starts playback of a playlist/album context, a list of track URIs, or
/// resumes when neither is given.
pub async fn play(context_uri: Option<String>, uris: Vec<String>, device: Option<String>) {
    let session = require_session(device).await;
    let request = PlayRequest {
        context_uri,
        uris: (!uris.is_empty()).then_some(uris),
    };

    match session
        .client()
        .play(session.device_id.as_deref(), &request)
        .await
    {
        Ok(_) => success!("Playback started."),
        Err(e) => report(e),
    }
}

pub async fn pause(device: Option<String>) {
    let session = require_session(device).await;
    match session.client().pause(session.device_id.as_deref()).await {
        Ok(_) => success!("Playback paused."),
        Err(e) => report(e),
    }
}

pub async fn devices() {
    let session = require_session(None).await;
    match session.client().devices().await {
        Ok(devices) if devices.is_empty() => {
            warning!("No playback devices found. Open Spotify on one of your devices.")
        }
        Ok(devices) => {
            let rows: Vec<DeviceTableRow> = devices
                .into_iter()
                .map(|d| DeviceTableRow {
                    name: d.name,
                    kind: d.kind,
                    id: d.id.unwrap_or_default(),
                    active: if d.is_active { "yes" } else { "" }.to_string(),
                })
                .collect();
            println!("{}", Table::new(rows));
        }
        Err(e) => report(e),
    }
}
