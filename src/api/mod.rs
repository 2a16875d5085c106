//! # API Module
//!
//! HTTP endpoints served by the local callback server during login.
//!
//! ## Endpoints
//!
//! - [`callback`] - Receives the redirect from Spotify's authorization
//!   server, checks the OAuth state nonce and exchanges the authorization
//!   code for an access token using the pending PKCE verifier.
//! - [`health`] - Reports that the server is up, with name and version.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use moodflow::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
