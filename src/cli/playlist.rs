use tabled::Table;

use crate::{
    config, info,
    management::{MetricsMode, PlaylistComposer, PlaylistPreset},
    metrics::{Metric, MetricsPolicy},
    spotify::SpotifyApi,
    warning,
};

use super::tracks::{authenticated_state, spinner};

pub struct PlaylistArgs {
    pub preset: PlaylistPreset,
    pub name: Option<String>,
    pub description: Option<String>,
    pub metrics: Vec<Metric>,
    pub strict: bool,
}

fn composer(args: PlaylistArgs) -> PlaylistComposer {
    let mut composer = PlaylistComposer::from_preset(args.preset);
    if let Some(name) = args.name {
        composer = composer.name(name);
    }
    if let Some(description) = args.description {
        composer = composer.description(description);
    }
    if !args.metrics.is_empty() {
        composer = composer.policy(MetricsPolicy::new(args.metrics));
    }
    if args.strict {
        composer = composer.mode(MetricsMode::RequirePopulation);
    }
    composer
}

pub async fn playlist(args: PlaylistArgs) {
    let api = SpotifyApi::new(config::api_url());
    let composer = composer(args);
    let mut state = authenticated_state().await;

    let pb = spinner("Fetching top tracks...");
    let fetched = state.fetch_top_tracks(&api).await;
    pb.finish_and_clear();

    if !fetched {
        return;
    }
    if state.tracks().is_empty() {
        warning!("Spotify has no top tracks for this account yet, nothing to add.");
        return;
    }

    info!(
        "Creating playlist {} with {} tracks",
        composer.playlist_name(),
        state.tracks().len()
    );
    let pb = spinner("Creating playlist...");
    let created = state.create_playlist(&api, &composer).await;
    pb.finish_and_clear();

    if !created {
        return;
    }

    if let Some(playlist) = state.playlist() {
        info!("Playlist Name: {}", playlist.name);
        if !playlist.external_urls.spotify.is_empty() {
            info!("Open Playlist on Spotify: {}", playlist.external_urls.spotify);
        }
    }

    match state.metrics() {
        Some(metrics) if !metrics.is_empty() => {
            info!("Playlist Insights");
            println!("{}", Table::new(metrics.table_rows()));
        }
        Some(_) => {}
        None => warning!("Insights skipped because the tracks could not be added."),
    }
}
