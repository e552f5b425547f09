//! # CLI Module
//!
//! Command bodies for the `toptracks` binary. Each command builds the state
//! it needs, delegates to the management and Spotify layers, and reports the
//! outcome with the console macros.
//!
//! ## Commands
//!
//! - [`auth`] - Log in with the implicit grant through the local callback page
//! - [`logout`] - Forget the stored credential
//! - [`status`] - Show whether a credential is stored and where
//! - [`list_tracks`] - Fetch and print the current top tracks
//! - [`playlist`] - Fetch the top tracks, create a playlist and print insights
//!
//! ## Usage Patterns
//!
//! ```bash
//! toptracks auth                              # Authenticate with Spotify
//! toptracks tracks                            # View your top 50 tracks
//! toptracks playlist                          # Create "My Top Favorite Songs"
//! toptracks playlist --preset diversity       # Popularity and genre diversity
//! toptracks playlist --metric distinct-artists --metric average-duration
//! toptracks logout
//! ```
//!
//! Remote failures are logged as diagnostics (`-v` for more detail) and leave
//! the command without output; only setup problems end the process with an
//! error.

mod auth;
mod playlist;
mod status;
mod tracks;

pub use auth::auth;
pub use auth::logout;
pub use playlist::PlaylistArgs;
pub use playlist::playlist;
pub use status::status;
pub use tracks::list_tracks;
