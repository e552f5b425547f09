use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Redirect fragment does not contain an access token")]
    MalformedRedirect,

    #[error("Not authenticated. Please run toptracks auth")]
    NotAuthenticated,

    #[error("Spotify rejected the credential ({0})")]
    Unauthorized(StatusCode),

    #[error("Spotify API returned {0}")]
    Status(StatusCode),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Cannot create a playlist from an empty track collection")]
    EmptyTrackCollection,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Classifies a non-success status code.
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AppError::Unauthorized(status),
            other => AppError::Status(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
