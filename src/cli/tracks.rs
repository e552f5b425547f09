use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config, error, info,
    management::{AppState, CredentialStore, Session},
    spotify::SpotifyApi,
    utils, warning,
};

pub(crate) fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

/// Starts an authenticated state or exits with a hint to log in.
pub(crate) async fn authenticated_state() -> AppState {
    let session = Session::initialize(CredentialStore::new(), &mut None).await;
    if !session.is_authenticated() {
        error!("Not authenticated. Please run toptracks auth");
    }
    AppState::new(session)
}

pub async fn list_tracks() {
    let api = SpotifyApi::new(config::api_url());
    let mut state = authenticated_state().await;

    let pb = spinner("Fetching top tracks...");
    let fetched = state.fetch_top_tracks(&api).await;
    pb.finish_and_clear();

    if !fetched {
        return;
    }

    if state.tracks().is_empty() {
        warning!("Spotify has no top tracks for this account yet.");
        return;
    }

    info!("Your top {} tracks", state.tracks().len());
    let table = Table::new(utils::track_table_rows(state.tracks()));
    println!("{}", table);
}
