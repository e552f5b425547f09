//! Listening insights computed over a track collection.
//!
//! A [`MetricsPolicy`] names the metrics to compute and [`compute`] turns a
//! non-empty track collection into a [`MetricsSnapshot`] holding one value per
//! metric, in policy order.

use std::{collections::HashSet, fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};

use crate::{
    error::{AppError, Result},
    types::{MetricTableRow, Track},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    AveragePopularity,
    AverageReleaseYear,
    DistinctArtists,
    AverageDurationMinutes,
    /// Top-track responses rarely carry artist genres, so this is usually 0.
    DistinctGenres,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::AveragePopularity,
        Metric::AverageReleaseYear,
        Metric::DistinctArtists,
        Metric::AverageDurationMinutes,
        Metric::DistinctGenres,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::AveragePopularity => "Average Popularity",
            Metric::AverageReleaseYear => "Average Release Year",
            Metric::DistinctArtists => "Unique Artists",
            Metric::AverageDurationMinutes => "Average Duration (minutes)",
            Metric::DistinctGenres => "Genre Diversity",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Metric::AveragePopularity => "average-popularity",
            Metric::AverageReleaseYear => "average-release-year",
            Metric::DistinctArtists => "distinct-artists",
            Metric::AverageDurationMinutes => "average-duration",
            Metric::DistinctGenres => "distinct-genres",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Metric::ALL
            .into_iter()
            .find(|m| m.key() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Metric::ALL.iter().map(|m| m.key()).collect();
                format!("unknown metric '{}', expected one of: {}", s, known.join(", "))
            })
    }
}

/// Ordered set of metrics to compute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsPolicy {
    metrics: Vec<Metric>,
}

impl MetricsPolicy {
    /// Builds a policy, dropping repeated metrics but keeping first-seen order.
    pub fn new(metrics: impl IntoIterator<Item = Metric>) -> Self {
        let mut seen = HashSet::new();
        let metrics = metrics.into_iter().filter(|m| seen.insert(*m)).collect();
        Self { metrics }
    }

    pub fn insights() -> Self {
        Self::new([
            Metric::AveragePopularity,
            Metric::AverageReleaseYear,
            Metric::DistinctArtists,
            Metric::AverageDurationMinutes,
        ])
    }

    pub fn diversity() -> Self {
        Self::new([Metric::AveragePopularity, Metric::DistinctGenres])
    }

    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    /// Shown with two decimals.
    Decimal(f64),
    Year(i32),
    Count(usize),
    Unavailable,
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Decimal(v) => write!(f, "{:.2}", v),
            MetricValue::Year(y) => write!(f, "{}", y),
            MetricValue::Count(c) => write!(f, "{}", c),
            MetricValue::Unavailable => f.write_str("n/a"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSnapshot {
    values: Vec<(Metric, MetricValue)>,
}

impl MetricsSnapshot {
    pub fn get(&self, metric: Metric) -> Option<MetricValue> {
        self.values
            .iter()
            .find(|(m, _)| *m == metric)
            .map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Metric, MetricValue)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn table_rows(&self) -> Vec<MetricTableRow> {
        self.values
            .iter()
            .map(|(m, v)| MetricTableRow {
                metric: m.label().to_string(),
                value: v.to_string(),
            })
            .collect()
    }
}

/// Computes every metric of `policy` over the whole collection.
///
/// # Errors
///
/// Returns [`AppError::EmptyTrackCollection`] for an empty collection.
pub fn compute(tracks: &[Track], policy: &MetricsPolicy) -> Result<MetricsSnapshot> {
    if tracks.is_empty() {
        return Err(AppError::EmptyTrackCollection);
    }

    let values = policy
        .metrics()
        .iter()
        .map(|metric| (*metric, compute_metric(tracks, *metric)))
        .collect();

    Ok(MetricsSnapshot { values })
}

fn compute_metric(tracks: &[Track], metric: Metric) -> MetricValue {
    match metric {
        Metric::AveragePopularity => {
            let scores = tracks.iter().map(|t| f64::from(t.popularity));
            mean(scores).map_or(MetricValue::Unavailable, |m| MetricValue::Decimal(round2(m)))
        }
        Metric::AverageReleaseYear => {
            let years = tracks
                .iter()
                .filter_map(|t| release_year(&t.album.release_date))
                .map(f64::from);
            mean(years).map_or(MetricValue::Unavailable, |m| MetricValue::Year(m.round() as i32))
        }
        Metric::DistinctArtists => {
            let lead_artists: HashSet<&str> = tracks
                .iter()
                .filter_map(|t| t.artists.first())
                .map(|a| a.name.as_str())
                .collect();
            MetricValue::Count(lead_artists.len())
        }
        Metric::AverageDurationMinutes => {
            let minutes = tracks.iter().map(|t| t.duration_ms as f64 / 60_000.0);
            mean(minutes).map_or(MetricValue::Unavailable, |m| MetricValue::Decimal(round2(m)))
        }
        Metric::DistinctGenres => {
            let genres: HashSet<&str> = tracks
                .iter()
                .flat_map(|t| t.artists.iter())
                .flat_map(|a| a.genres.iter())
                .map(String::as_str)
                .collect();
            MetricValue::Count(genres.len())
        }
    }
}

/// Year of a Spotify release date with `day`, `month` or `year` precision.
pub fn release_year(release_date: &str) -> Option<i32> {
    let date = release_date.trim();
    if let Ok(d) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return Some(d.year());
    }

    let year = date.get(..4)?;
    if !year.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    match date.as_bytes().get(4) {
        None | Some(b'-') => year.parse().ok(),
        Some(_) => None,
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
