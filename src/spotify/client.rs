use reqwest::{Client, Response};

use crate::error::{AppError, Result};

/// Authenticated access to the Spotify Web API rooted at `base_url`.
#[derive(Debug, Clone)]
pub struct SpotifyApi {
    client: Client,
    base_url: String,
}

impl SpotifyApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{base}{path}", base = self.base_url, path = path)
    }
}

/// Passes 2xx responses through and classifies everything else.
pub(crate) fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(AppError::from_status(status))
    }
}
