use tracing::debug;

use crate::{
    error::Result,
    spotify::{SpotifyApi, client::check_status},
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest, Credential,
        Playlist, Track,
    },
};

impl SpotifyApi {
    /// Creates a private playlist for the current user.
    pub async fn create_playlist(
        &self,
        credential: &Credential,
        name: &str,
        description: &str,
    ) -> Result<Playlist> {
        let body = CreatePlaylistRequest {
            name: name.to_string(),
            description: description.to_string(),
            public: false,
        };

        let response = self
            .client()
            .post(self.url("/me/playlists"))
            .bearer_auth(credential.as_str())
            .json(&body)
            .send()
            .await?;
        let response = check_status(response)?;

        let playlist = response.json::<Playlist>().await?;
        debug!(playlist_id = %playlist.id, name = %playlist.name, "created playlist");
        Ok(playlist)
    }

    /// Adds `tracks` to a playlist in one request, keeping their order.
    pub async fn add_tracks(
        &self,
        credential: &Credential,
        playlist_id: &str,
        tracks: &[Track],
    ) -> Result<AddTrackToPlaylistResponse> {
        let body = AddTrackToPlaylistRequest {
            uris: tracks.iter().map(|t| t.uri.clone()).collect(),
        };

        let response = self
            .client()
            .post(self.url(&format!("/playlists/{playlist_id}/tracks")))
            .bearer_auth(credential.as_str())
            .json(&body)
            .send()
            .await?;
        let response = check_status(response)?;

        let json = response.json::<AddTrackToPlaylistResponse>().await?;
        debug!(playlist_id, snapshot_id = ?json.snapshot_id, "added tracks");
        Ok(json)
    }
}
