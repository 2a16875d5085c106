//! # CLI Module
//!
//! User-facing commands of `moodflow`. Each command opens the local storage,
//! builds a [`Session`] when credentials exist and delegates to the
//! [`crate::spotify`] client or the built-in [`crate::catalog`].
//!
//! ## Commands
//!
//! - [`auth`] - Opens the Spotify authorization page (PKCE or implicit)
//! - [`login`] - Finishes a login from a pasted redirect URL or a raw token
//! - [`logout`] - Forgets credentials and any pending authorization
//! - [`status`] - Shows whether a Spotify account is connected
//! - [`options`] - Lists the times of day and moods to choose from
//! - [`playlist`] - Shows the playlist for a time of day and mood
//! - [`search`] - Free-text track or playlist search
//! - [`play`] / [`pause`] - Playback control
//! - [`devices`] - Lists playback devices
//!
//! ## Usage Patterns
//!
//! ```bash
//! moodflow auth                               # Connect to Spotify
//! moodflow playlist --time night --mood happy # Pick a playlist
//! moodflow playlist --play                    # ...and start it
//! moodflow pause
//! moodflow logout
//! ```
//!
//! Without a connection `playlist` falls back to the built-in catalog.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error,
    management::{CredentialsManager, LocalStorage, Session},
};

mod auth;
mod options;
mod playback;
mod playlist;

pub use auth::auth;
pub use auth::login;
pub use auth::logout;
pub use auth::status;
pub use options::options;
pub use playback::devices;
pub use playback::pause;
pub use playback::play;
pub use playlist::playlist;
pub use playlist::search;
pub use playlist::SearchKind;

fn credentials_manager() -> CredentialsManager {
    CredentialsManager::new(LocalStorage::default_location())
}

async fn current_session(device_id: Option<String>) -> Option<Session> {
    let mut manager = credentials_manager();
    match Session::current(&mut manager, device_id).await {
        Ok(session) => session,
        Err(e) => error!("Cannot read stored credentials: {}", e),
    }
}

async fn require_session(device_id: Option<String>) -> Session {
    match current_session(device_id).await {
        Some(session) => session,
        None => error!("Not connected to Spotify. Run `moodflow auth` first."),
    }
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
