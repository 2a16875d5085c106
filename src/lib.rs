//! MoodFlow Library
//!
//! This library provides the building blocks of the `moodflow` command line
//! soundtrack curator: pick a time of day and a mood, then get a matching
//! playlist, either from a built-in catalog or live from the Spotify Web API.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for the local OAuth callback server
//! - `catalog` - Built-in playlists used while not connected to Spotify
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `display` - Playlist display states and terminal rendering
//! - `management` - Local storage, credentials and session handling
//! - `selection` - Time-of-day and mood selection
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client and OAuth flow
//! - `types` - Data structures and type definitions
//! - `utils` - PKCE helpers and URL handling
//!
//! # Example
//!
//! ```
//! use moodflow::{catalog, selection::{Mood, TimeOfDay}};
//!
//! let playlist = catalog::mock_playlist(TimeOfDay::Night, Mood::Happy);
//! println!("{}", playlist.name);
//! ```

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod display;
pub mod management;
pub mod selection;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Uses a boxed dynamic error trait object with Send + Sync bounds so it
/// can cross await points and task boundaries.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Searching playlists for {}", query);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for the command layer, where nothing else can be done about
/// the failure. Library code returns errors instead.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable problems, e.g. a failed token exchange that leaves
/// the user unauthenticated.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
