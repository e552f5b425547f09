//! Spotify Top Tracks CLI Library
//!
//! This library turns a user's Spotify top tracks into a private playlist and
//! computes a few listening insights over them. It includes modules for the
//! implicit-grant login flow, API communication, session state, and the
//! metrics calculation.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for the local callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy shared by all layers
//! - `management` - Session, credential store and playlist composition
//! - `metrics` - Metrics policy and snapshot calculation
//! - `server` - Local HTTP server for the OAuth redirect
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use toptracks::metrics::{self, MetricsPolicy};
//!
//! let snapshot = metrics::compute(&tracks, &MetricsPolicy::insights())?;
//! for row in snapshot.table_rows() {
//!     println!("{}: {}", row.metric, row.value);
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod metrics;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::{AppError, Result};

/// Prints an informational message with a blue bullet point.
///
/// Used for general information and status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Starting authentication process...");
/// info!("Found {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Authentication completed successfully");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the program with exit code 1. It should only be used for fatal
/// setup errors where recovery is not possible. Remote-call failures are
/// logged as diagnostics instead.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
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
/// Used for recoverable issues or important notices that don't require
/// program termination.
///
/// # Example
///
/// ```
/// warning!("No top tracks available yet");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
