//! Configuration management for the Spotify Top Tracks CLI.
//!
//! This module handles loading configuration values from environment variables
//! and `.env` files. The lookup order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (everything except the client ID has one)

use std::{env, net::SocketAddr, path::PathBuf, str::FromStr};

use tracing::debug;

use crate::error::{AppError, Result};

pub const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8888/callback";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the directory structure if it doesn't exist. The file is looked up in:
/// - Linux: `~/.local/share/toptracks/.env`
/// - macOS: `~/Library/Application Support/toptracks/.env`
/// - Windows: `%LOCALAPPDATA%/toptracks/.env`
///
/// A missing `.env` file is not an error; the process environment and the
/// defaults still apply.
///
/// # Errors
///
/// Returns an error string if the parent directory cannot be created.
pub async fn load_env() -> std::result::Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if let Err(e) = dotenv::from_path(&path) {
        debug!(path = %path.display(), error = %e, "no .env file loaded");
    }
    Ok(())
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("toptracks/.env");
    path
}

/// Runtime configuration for the login flow and API calls.
#[derive(Debug, Clone)]
pub struct Config {
    /// `SPOTIFY_API_AUTH_CLIENT_ID`, required.
    pub client_id: String,
    /// `SPOTIFY_API_REDIRECT_URI`, must match the app registration.
    pub redirect_uri: String,
    /// `SERVER_ADDRESS`, where the callback server binds.
    pub server_address: String,
    /// `SPOTIFY_API_AUTH_URL`
    pub auth_url: String,
    /// `SPOTIFY_API_URL`
    pub api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    ///
    /// Blank values count as unset, so every optional variable falls back to
    /// its default.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] when `SPOTIFY_API_AUTH_CLIENT_ID` is
    /// missing or blank.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let client_id = non_blank(lookup("SPOTIFY_API_AUTH_CLIENT_ID"))
            .ok_or_else(|| AppError::Config("SPOTIFY_API_AUTH_CLIENT_ID must be set".into()))?;
        let var_or = |key: &str, default: &str| {
            non_blank(lookup(key)).unwrap_or_else(|| default.to_string())
        };

        Ok(Self {
            client_id,
            redirect_uri: var_or("SPOTIFY_API_REDIRECT_URI", DEFAULT_REDIRECT_URI),
            server_address: var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            auth_url: var_or("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL),
            api_url: var_or("SPOTIFY_API_URL", DEFAULT_API_URL),
        })
    }

    pub fn server_socket_addr(&self) -> Result<SocketAddr> {
        SocketAddr::from_str(&self.server_address).map_err(|e| {
            AppError::Config(format!(
                "Failed to parse server address {}: {}",
                self.server_address, e
            ))
        })
    }
}

/// Returns the Spotify Web API base URL (`SPOTIFY_API_URL`).
///
/// Unlike [`Config::from_env`] this needs no client ID, so commands that only
/// use a stored credential can run without one.
pub fn api_url() -> String {
    non_blank(env::var("SPOTIFY_API_URL").ok()).unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
