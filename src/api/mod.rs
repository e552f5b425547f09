//! # API Module
//!
//! HTTP endpoints served by the local callback server while `toptracks auth`
//! is waiting for the Spotify redirect.
//!
//! ## Endpoints
//!
//! - [`callback`] - `GET /callback`, the redirect URI. Serves a page that
//!   forwards the URL fragment (which browsers never send to a server) to
//!   `/token` and clears it from the address bar.
//! - [`token`] - `POST /token`, accepts the raw fragment when its `state`
//!   matches the login in progress.
//! - [`health`] - `GET /health`, status and version.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::{get, post}};
//! use toptracks::api::{callback, health, token};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/token", post(token))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::{callback, token};
pub use health::health;
