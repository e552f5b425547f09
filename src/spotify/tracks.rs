use tracing::debug;

use crate::{
    error::Result,
    spotify::{SpotifyApi, client::check_status},
    types::{Credential, TopTracksResponse, Track},
};

/// Size of the single page of top tracks requested.
pub const TOP_TRACKS_LIMIT: u32 = 50;

impl SpotifyApi {
    /// Retrieves the authenticated user's top tracks.
    ///
    /// Issues one `GET /me/top/tracks?limit=50`. Only the first page is read;
    /// the `next` cursor of the response is ignored.
    ///
    /// # Errors
    ///
    /// - [`crate::AppError::Unauthorized`] for an expired or invalid credential
    /// - [`crate::AppError::Status`] for other non-2xx responses
    /// - [`crate::AppError::Http`] for network or decoding failures
    ///
    /// # Example
    ///
    /// ```
    /// let tracks = api.top_tracks(&credential).await?;
    /// println!("Fetched {} tracks", tracks.len());
    /// ```
    pub async fn top_tracks(&self, credential: &Credential) -> Result<Vec<Track>> {
        let api_url = self.url(&format!(
            "/me/top/tracks?limit={limit}",
            limit = TOP_TRACKS_LIMIT
        ));

        let response = self
            .client()
            .get(&api_url)
            .bearer_auth(credential.as_str())
            .send()
            .await?;
        let response = check_status(response)?;

        let json = response.json::<TopTracksResponse>().await?;
        debug!(count = json.items.len(), "fetched top tracks");
        Ok(json.items)
    }
}
