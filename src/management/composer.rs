use std::{fmt, str::FromStr};

use tracing::warn;

use crate::{
    error::{AppError, Result},
    metrics::{self, MetricsPolicy, MetricsSnapshot},
    spotify::SpotifyApi,
    types::{Credential, Playlist, Track},
};

/// Named playlist flavours: title, description and the insights shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaylistPreset {
    #[default]
    Favorites,
    Weekly,
    Diversity,
}

impl PlaylistPreset {
    pub const ALL: [PlaylistPreset; 3] = [
        PlaylistPreset::Favorites,
        PlaylistPreset::Weekly,
        PlaylistPreset::Diversity,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PlaylistPreset::Favorites => "My Top Favorite Songs",
            PlaylistPreset::Weekly => "My Discover Weekly",
            PlaylistPreset::Diversity => "My Genre Diversity Mix",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PlaylistPreset::Favorites => {
                "A playlist of your top favorite songs with added insights"
            }
            PlaylistPreset::Weekly => "A weekly mix built from your current top tracks",
            PlaylistPreset::Diversity => {
                "Your top tracks with a look at how diverse your listening is"
            }
        }
    }

    pub fn policy(self) -> MetricsPolicy {
        match self {
            PlaylistPreset::Favorites | PlaylistPreset::Weekly => MetricsPolicy::insights(),
            PlaylistPreset::Diversity => MetricsPolicy::diversity(),
        }
    }

    fn key(self) -> &'static str {
        match self {
            PlaylistPreset::Favorites => "favorites",
            PlaylistPreset::Weekly => "weekly",
            PlaylistPreset::Diversity => "diversity",
        }
    }
}

impl fmt::Display for PlaylistPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PlaylistPreset {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        PlaylistPreset::ALL
            .into_iter()
            .find(|p| p.key() == wanted)
            .ok_or_else(|| format!("unknown preset '{}', expected favorites, weekly or diversity", s))
    }
}

/// Whether metrics still run when adding tracks to the new playlist failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricsMode {
    /// Metrics come from the local collection regardless of population.
    #[default]
    Always,
    RequirePopulation,
}

#[derive(Debug, Clone)]
pub struct Composition {
    pub playlist: Playlist,
    /// False when the add-tracks request failed; the playlist then exists
    /// remotely but is empty.
    pub populated: bool,
    pub metrics: Option<MetricsSnapshot>,
}

#[derive(Debug, Clone)]
pub struct PlaylistComposer {
    name: String,
    description: String,
    policy: MetricsPolicy,
    mode: MetricsMode,
}

impl Default for PlaylistComposer {
    fn default() -> Self {
        Self::from_preset(PlaylistPreset::default())
    }
}

impl PlaylistComposer {
    pub fn from_preset(preset: PlaylistPreset) -> Self {
        Self {
            name: preset.name().to_string(),
            description: preset.description().to_string(),
            policy: preset.policy(),
            mode: MetricsMode::default(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn policy(mut self, policy: MetricsPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn mode(mut self, mode: MetricsMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn playlist_name(&self) -> &str {
        &self.name
    }

    /// Creates the playlist, fills it with `tracks` and computes the metrics.
    ///
    /// Steps run in order and each depends on the previous one:
    /// 1. Reject an empty collection without touching the network
    /// 2. Create the private playlist; a failure aborts before any tracks are sent
    /// 3. Add every track URI, in collection order, with one request
    /// 4. Compute the metrics snapshot over the full collection
    ///
    /// A failure in step 3 is logged and reported through
    /// [`Composition::populated`]; the playlist is not rolled back.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EmptyTrackCollection`] for an empty collection and
    /// the API error of step 2 if the playlist cannot be created.
    pub async fn compose(
        &self,
        api: &SpotifyApi,
        credential: &Credential,
        tracks: &[Track],
    ) -> Result<Composition> {
        if tracks.is_empty() {
            return Err(AppError::EmptyTrackCollection);
        }

        let playlist = api
            .create_playlist(credential, &self.name, &self.description)
            .await?;

        let populated = match api.add_tracks(credential, &playlist.id, tracks).await {
            Ok(_) => true,
            Err(e) => {
                warn!(playlist_id = %playlist.id, error = %e, "failed to add tracks to playlist");
                false
            }
        };

        let metrics = if populated || self.mode == MetricsMode::Always {
            Some(metrics::compute(tracks, &self.policy)?)
        } else {
            None
        };

        Ok(Composition {
            playlist,
            populated,
            metrics,
        })
    }
}
