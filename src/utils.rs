use rand::{Rng, distr::Alphanumeric};

use crate::{
    management::PlaylistPreset,
    metrics::Metric,
    types::{Track, TrackTableRow},
};

/// Random value for the OAuth `state` parameter.
pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Formats milliseconds as `m:ss`.
pub fn format_duration(duration_ms: u64) -> String {
    let total_seconds = duration_ms / 1000;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

pub fn track_table_rows(tracks: &[Track]) -> Vec<TrackTableRow> {
    tracks
        .iter()
        .enumerate()
        .map(|(i, track)| TrackTableRow {
            rank: i + 1,
            name: track.name.clone(),
            artists: track
                .artists
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            popularity: track.popularity,
            duration: format_duration(track.duration_ms),
        })
        .collect()
}

pub fn parse_metric(s: &str) -> Result<Metric, String> {
    s.parse()
}

pub fn parse_preset(s: &str) -> Result<PlaylistPreset, String> {
    s.parse()
}
