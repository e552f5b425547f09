mod common;

use common::track;
use toptracks::{
    AppError,
    metrics::{Metric, MetricValue, MetricsPolicy, compute, release_year},
    types::Track,
};

fn all_metrics() -> MetricsPolicy {
    MetricsPolicy::new(Metric::ALL)
}

#[test]
fn test_average_popularity() {
    let tracks = vec![
        track("spotify:track:1", 10, "2020-01-01", 180000, &["A"]),
        track("spotify:track:2", 20, "2020-01-01", 180000, &["B"]),
        track("spotify:track:3", 30, "2020-01-01", 180000, &["C"]),
    ];

    let snapshot = compute(&tracks, &all_metrics()).unwrap();
    let value = snapshot.get(Metric::AveragePopularity).unwrap();

    assert_eq!(value, MetricValue::Decimal(20.0));
    assert_eq!(value.to_string(), "20.00");
}

#[test]
fn test_average_popularity_rounds_to_two_decimals() {
    let tracks = vec![
        track("spotify:track:1", 10, "2020-01-01", 180000, &["A"]),
        track("spotify:track:2", 10, "2020-01-01", 180000, &["A"]),
        track("spotify:track:3", 11, "2020-01-01", 180000, &["A"]),
    ];

    let snapshot = compute(&tracks, &all_metrics()).unwrap();

    assert_eq!(
        snapshot.get(Metric::AveragePopularity),
        Some(MetricValue::Decimal(10.33))
    );
}

#[test]
fn test_average_release_year() {
    let tracks = vec![
        track("spotify:track:1", 50, "2020-01-01", 180000, &["A"]),
        track("spotify:track:2", 50, "2022-06-01", 180000, &["B"]),
    ];

    let snapshot = compute(&tracks, &all_metrics()).unwrap();

    assert_eq!(
        snapshot.get(Metric::AverageReleaseYear),
        Some(MetricValue::Year(2021))
    );
}

#[test]
fn test_average_release_year_handles_precision_and_garbage() {
    let tracks = vec![
        track("spotify:track:1", 50, "1999", 180000, &["A"]),
        track("spotify:track:2", 50, "2001-05", 180000, &["A"]),
        track("spotify:track:3", 50, "unknown", 180000, &["A"]),
    ];

    let snapshot = compute(&tracks, &all_metrics()).unwrap();

    // the unparsable date is skipped: (1999 + 2001) / 2
    assert_eq!(
        snapshot.get(Metric::AverageReleaseYear),
        Some(MetricValue::Year(2000))
    );
}

#[test]
fn test_average_release_year_unavailable_without_dates() {
    let tracks = vec![track("spotify:track:1", 50, "", 180000, &["A"])];

    let snapshot = compute(&tracks, &all_metrics()).unwrap();

    assert_eq!(
        snapshot.get(Metric::AverageReleaseYear),
        Some(MetricValue::Unavailable)
    );
    assert_eq!(MetricValue::Unavailable.to_string(), "n/a");
}

#[test]
fn test_release_year() {
    assert_eq!(release_year("2020-01-01"), Some(2020));
    assert_eq!(release_year("1987"), Some(1987));
    assert_eq!(release_year("1987-03"), Some(1987));
    assert_eq!(release_year("19870"), None);
    assert_eq!(release_year("abcd-01-01"), None);
    assert_eq!(release_year(""), None);
}

#[test]
fn test_distinct_artists_uses_first_artist_exactly() {
    let tracks = vec![
        track("spotify:track:1", 50, "2020-01-01", 180000, &["A", "Z"]),
        track("spotify:track:2", 50, "2020-01-01", 180000, &["A"]),
        track("spotify:track:3", 50, "2020-01-01", 180000, &["B", "A"]),
    ];

    let snapshot = compute(&tracks, &all_metrics()).unwrap();
    assert_eq!(
        snapshot.get(Metric::DistinctArtists),
        Some(MetricValue::Count(2))
    );

    // case-sensitive, no normalization
    let tracks = vec![
        track("spotify:track:1", 50, "2020-01-01", 180000, &["a"]),
        track("spotify:track:2", 50, "2020-01-01", 180000, &["A"]),
        track("spotify:track:3", 50, "2020-01-01", 180000, &[]),
    ];
    let snapshot = compute(&tracks, &all_metrics()).unwrap();
    assert_eq!(
        snapshot.get(Metric::DistinctArtists),
        Some(MetricValue::Count(2))
    );
}

#[test]
fn test_average_duration_minutes() {
    let tracks = vec![
        track("spotify:track:1", 50, "2020-01-01", 180000, &["A"]),
        track("spotify:track:2", 50, "2020-01-01", 210000, &["A"]),
    ];

    let snapshot = compute(&tracks, &all_metrics()).unwrap();
    let value = snapshot.get(Metric::AverageDurationMinutes).unwrap();

    assert_eq!(value, MetricValue::Decimal(3.25));
    assert_eq!(value.to_string(), "3.25");
}

#[test]
fn test_distinct_genres_degrades_to_zero() {
    // top-track artists usually come without genres
    let tracks = vec![
        track("spotify:track:1", 50, "2020-01-01", 180000, &["A"]),
        track("spotify:track:2", 50, "2020-01-01", 180000, &["B"]),
    ];

    let snapshot = compute(&tracks, &MetricsPolicy::diversity()).unwrap();

    assert_eq!(
        snapshot.get(Metric::DistinctGenres),
        Some(MetricValue::Count(0))
    );
}

#[test]
fn test_distinct_genres_counts_all_artists() {
    let mut first = track("spotify:track:1", 50, "2020-01-01", 180000, &["A", "B"]);
    first.artists[0].genres = vec!["pop".to_string(), "rock".to_string()];
    first.artists[1].genres = vec!["jazz".to_string()];
    let mut second = track("spotify:track:2", 50, "2020-01-01", 180000, &["C"]);
    second.artists[0].genres = vec!["pop".to_string()];

    let snapshot = compute(&[first, second], &MetricsPolicy::diversity()).unwrap();

    assert_eq!(
        snapshot.get(Metric::DistinctGenres),
        Some(MetricValue::Count(3))
    );
}

#[test]
fn test_compute_rejects_empty_collection() {
    let tracks: Vec<Track> = Vec::new();

    assert!(matches!(
        compute(&tracks, &all_metrics()),
        Err(AppError::EmptyTrackCollection)
    ));
}

#[test]
fn test_snapshot_follows_policy() {
    let tracks = vec![track("spotify:track:1", 50, "2020-01-01", 180000, &["A"])];

    let snapshot = compute(&tracks, &MetricsPolicy::insights()).unwrap();
    let metrics: Vec<Metric> = snapshot.iter().map(|(m, _)| *m).collect();
    assert_eq!(
        metrics,
        vec![
            Metric::AveragePopularity,
            Metric::AverageReleaseYear,
            Metric::DistinctArtists,
            Metric::AverageDurationMinutes,
        ]
    );
    assert_eq!(snapshot.get(Metric::DistinctGenres), None);

    let rows = snapshot.table_rows();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].metric, "Average Popularity");
    assert_eq!(rows[0].value, "50.00");
}

#[test]
fn test_policy_dedupes_in_first_seen_order() {
    let policy = MetricsPolicy::new([
        Metric::DistinctGenres,
        Metric::AveragePopularity,
        Metric::DistinctGenres,
    ]);

    assert_eq!(
        policy.metrics(),
        &[Metric::DistinctGenres, Metric::AveragePopularity]
    );
}

#[test]
fn test_metric_from_str() {
    assert_eq!(
        "average-popularity".parse::<Metric>(),
        Ok(Metric::AveragePopularity)
    );
    assert_eq!("Distinct-Genres".parse::<Metric>(), Ok(Metric::DistinctGenres));
    assert!("loudness".parse::<Metric>().is_err());

    for metric in Metric::ALL {
        assert_eq!(metric.to_string().parse::<Metric>(), Ok(metric));
    }
}
