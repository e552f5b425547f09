//! # Spotify Integration Module
//!
//! This module is the integration layer between toptracks and the Spotify Web
//! API. It covers the implicit-grant login flow and the three REST calls the
//! application needs.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Management)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (implicit grant, local callback page)
//!     ├── Top Tracks (single page of 50)
//!     └── Playlist Operations (Create, Add tracks)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## API Coverage
//!
//! - `GET /me/top/tracks?limit=50` - The user's top tracks
//! - `POST /me/playlists` - Create a private playlist
//! - `POST /playlists/{playlist_id}/tracks` - Add tracks to a playlist
//!
//! ## Error Handling
//!
//! Every call returns [`crate::error::Result`]. Unauthorized and forbidden
//! responses become [`crate::AppError::Unauthorized`], every other non-2xx
//! status becomes [`crate::AppError::Status`]. There is no retry or backoff;
//! callers decide what a failure means for their state.
//!
//! ## Usage Patterns
//!
//! ```rust
//! let api = SpotifyApi::new(&config.api_url);
//! let tracks = api.top_tracks(&credential).await?;
//! let playlist = api.create_playlist(&credential, "Name", "Description").await?;
//! api.add_tracks(&credential, &playlist.id, &tracks).await?;
//! ```

pub mod auth;
mod client;
pub mod playlist;
pub mod tracks;

pub use client::SpotifyApi;
