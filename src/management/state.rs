use tracing::{debug, warn};

use crate::{
    error::{AppError, Result},
    management::{Composition, PlaylistComposer, Session},
    metrics::MetricsSnapshot,
    spotify::SpotifyApi,
    success,
    types::{Playlist, Track},
    warning,
};

/// Everything one run of the application knows: the session, the current
/// track collection, and the last playlist with its metrics.
///
/// Remote failures are logged here and never propagated; the affected part
/// of the state keeps its previous value.
#[derive(Debug)]
pub struct AppState {
    session: Session,
    tracks: Vec<Track>,
    playlist: Option<Playlist>,
    populated: bool,
    metrics: Option<MetricsSnapshot>,
}

impl AppState {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            tracks: Vec::new(),
            playlist: None,
            populated: false,
            metrics: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn playlist(&self) -> Option<&Playlist> {
        self.playlist.as_ref()
    }

    /// Whether the last playlist received its tracks.
    pub fn is_populated(&self) -> bool {
        self.populated
    }

    pub fn metrics(&self) -> Option<&MetricsSnapshot> {
        self.metrics.as_ref()
    }

    /// Replaces the track collection with the user's current top tracks.
    ///
    /// Returns false when there is no credential or the request failed; the
    /// previous collection is kept in both cases.
    pub async fn fetch_top_tracks(&mut self, api: &SpotifyApi) -> bool {
        let Some(credential) = self.session.credential() else {
            warn!(error = %AppError::NotAuthenticated, "fetch skipped");
            return false;
        };

        match api.top_tracks(credential).await {
            Ok(tracks) => {
                self.tracks = tracks;
                true
            }
            Err(e) => {
                warn!(error = %e, "error fetching top tracks");
                false
            }
        }
    }

    /// Creates a playlist from the current collection.
    ///
    /// On success the playlist and metrics are replaced and a one-line
    /// notification is printed; it is a warning when the playlist stayed
    /// empty. On failure nothing changes.
    pub async fn create_playlist(&mut self, api: &SpotifyApi, composer: &PlaylistComposer) -> bool {
        let Some(credential) = self.session.credential() else {
            warn!(error = %AppError::NotAuthenticated, "playlist creation skipped");
            return false;
        };

        match composer.compose(api, credential, &self.tracks).await {
            Ok(Composition {
                playlist,
                populated,
                metrics,
            }) => {
                debug!(playlist_id = %playlist.id, populated, "playlist composed");
                if populated {
                    success!("Your playlist {} has been created!", playlist.name);
                } else {
                    warning!(
                        "Playlist {} was created, but the tracks could not be added.",
                        playlist.name
                    );
                }
                self.playlist = Some(playlist);
                self.populated = populated;
                self.metrics = metrics;
                true
            }
            Err(e) => {
                warn!(error = %e, "error creating playlist");
                false
            }
        }
    }

    /// Logs out; the fetched tracks and last playlist stay in memory.
    pub async fn logout(&mut self) -> Result<()> {
        self.session.logout().await
    }
}
