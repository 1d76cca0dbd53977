//! Time-series derivations over a summary timeline.
//!
//! These are the pure computations behind the results chart: running
//! cumulative counts per outcome kind, and a sliding-window win rate.
//! They only assume the input is sorted ascending by timestamp, which is
//! what [`Summary::timeline`](crate::summary::Summary) guarantees.

use chrono::{DateTime, Utc};

use crate::outcome::{Outcome, TimestampedOutcome};

/// Sliding-window length for the win-rate series.
pub const WIN_RATE_WINDOW: usize = 5;

/// One cumulative-count sample; one per dated outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CumulativePoint {
    /// Timestamp of the outcome this sample includes up to.
    pub timestamp: DateTime<Utc>,

    /// Wins so far, inclusive.
    pub wins: u64,

    /// Losses so far, inclusive.
    pub losses: u64,

    /// Draws so far, inclusive.
    pub draws: u64,
}

/// Computes the running cumulative count of each outcome kind.
///
/// Every entry of the timeline yields one sample, counting outcomes up to
/// and including that position.
pub fn cumulative_counts(timeline: &[TimestampedOutcome]) -> Vec<CumulativePoint> {
    let mut wins = 0;
    let mut losses = 0;
    let mut draws = 0;

    timeline
        .iter()
        .map(|entry| {
            match entry.outcome {
                Outcome::Win => wins += 1,
                Outcome::Loss => losses += 1,
                Outcome::Draw => draws += 1,
            }
            CumulativePoint {
                timestamp: entry.timestamp,
                wins,
                losses,
                draws,
            }
        })
        .collect()
}

/// Computes the win percentage over each window of consecutive outcomes.
///
/// Each sample is keyed by the timestamp of its window's last element.
/// Returns an empty series when fewer than `window` outcomes exist or
/// `window` is zero.
pub fn windowed_win_rate(
    timeline: &[TimestampedOutcome],
    window: usize,
) -> Vec<(DateTime<Utc>, f64)> {
    if window == 0 || timeline.len() < window {
        return Vec::new();
    }

    timeline
        .windows(window)
        .map(|w| {
            let wins = w.iter().filter(|entry| entry.outcome.is_win()).count();
            let rate = wins as f64 / window as f64 * 100.0;
            (w[window - 1].timestamp, rate)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(day: u32, outcome: Outcome) -> TimestampedOutcome {
        let ts = Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap();
        TimestampedOutcome::new(ts, outcome)
    }

    #[test]
    fn test_cumulative_empty() {
        assert!(cumulative_counts(&[]).is_empty());
    }

    #[test]
    fn test_cumulative_one_point_per_outcome() {
        let timeline = vec![
            entry(1, Outcome::Win),
            entry(2, Outcome::Loss),
            entry(3, Outcome::Win),
            entry(4, Outcome::Draw),
        ];
        let points = cumulative_counts(&timeline);

        assert_eq!(points.len(), 4);
        assert_eq!((points[0].wins, points[0].losses, points[0].draws), (1, 0, 0));
        assert_eq!((points[1].wins, points[1].losses, points[1].draws), (1, 1, 0));
        assert_eq!((points[3].wins, points[3].losses, points[3].draws), (2, 1, 1));
    }

    #[test]
    fn test_cumulative_counts_are_monotonic() {
        let timeline = vec![
            entry(1, Outcome::Loss),
            entry(2, Outcome::Loss),
            entry(3, Outcome::Win),
        ];
        let points = cumulative_counts(&timeline);
        for pair in points.windows(2) {
            assert!(pair[1].wins >= pair[0].wins);
            assert!(pair[1].losses >= pair[0].losses);
            assert!(pair[1].draws >= pair[0].draws);
        }
    }

    #[test]
    fn test_win_rate_fewer_than_window_is_empty() {
        let timeline = vec![entry(1, Outcome::Win), entry(2, Outcome::Win)];
        assert!(windowed_win_rate(&timeline, WIN_RATE_WINDOW).is_empty());
    }

    #[test]
    fn test_win_rate_zero_window_is_empty() {
        let timeline = vec![entry(1, Outcome::Win)];
        assert!(windowed_win_rate(&timeline, 0).is_empty());
    }

    #[test]
    fn test_win_rate_exact_window() {
        let timeline = vec![
            entry(1, Outcome::Win),
            entry(2, Outcome::Loss),
            entry(3, Outcome::Win),
            entry(4, Outcome::Draw),
            entry(5, Outcome::Win),
        ];
        let series = windowed_win_rate(&timeline, 5);

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].0, timeline[4].timestamp);
        assert_eq!(series[0].1, 60.0);
    }

    #[test]
    fn test_win_rate_slides_over_timeline() {
        let timeline: Vec<_> = (1..=7)
            .map(|day| entry(day, if day <= 5 { Outcome::Win } else { Outcome::Loss }))
            .collect();
        let series = windowed_win_rate(&timeline, 5);

        assert_eq!(series.len(), 3);
        assert_eq!(series[0].1, 100.0);
        assert_eq!(series[1].1, 80.0);
        assert_eq!(series[2].1, 60.0);
        // Keyed by each window's last element.
        assert_eq!(series[2].0, timeline[6].timestamp);
    }
}
