//! Aggregate results produced by one parse of a transcript.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::outcome::{Outcome, TimestampedOutcome};

/// Aggregate game results extracted from a transcript.
///
/// Holds the per-outcome counts plus the time-ordered sequence of dated
/// outcomes. The counts include every recognized result marker; the
/// `timeline` only includes outcomes whose message block carried a
/// parseable timestamp, sorted ascending.
///
/// A summary is produced once per parse and not mutated afterwards.
///
/// # Example
///
/// ```
/// use pigeonstats::parser::TranscriptParser;
///
/// let parser = TranscriptParser::new();
/// let summary = parser.parse_str("Jan 1, 2024 10:00:00 AM\nMe\nGamePigeon message:\nI won!");
/// assert_eq!(summary.wins, 1);
/// assert_eq!(summary.total(), 1);
/// assert_eq!(summary.timeline.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    /// Number of games the transcript owner won.
    pub wins: u64,

    /// Number of games the transcript owner lost.
    pub losses: u64,

    /// Number of games that ended in a draw.
    pub draws: u64,

    /// Dated outcomes, ascending by timestamp.
    pub timeline: Vec<TimestampedOutcome>,
}

impl Summary {
    /// Records one recognized result marker.
    ///
    /// The counter is always incremented; the timeline entry is only added
    /// when the enclosing message block had a parseable timestamp.
    pub(crate) fn record(&mut self, outcome: Outcome, timestamp: Option<DateTime<Utc>>) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }

        if let Some(ts) = timestamp {
            self.timeline.push(TimestampedOutcome::new(ts, outcome));
        }
    }

    /// Sorts the timeline ascending by timestamp.
    pub(crate) fn finish(mut self) -> Self {
        self.timeline.sort_by_key(|entry| entry.timestamp);
        self
    }

    /// Total number of games recorded.
    pub fn total(&self) -> u64 {
        self.wins + self.losses + self.draws
    }

    /// Returns `true` if no result markers were found.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Share of games won, in percent. `0.0` when no games were recorded.
    pub fn win_percentage(&self) -> f64 {
        self.percentage(self.wins)
    }

    /// Share of games lost, in percent. `0.0` when no games were recorded.
    pub fn loss_percentage(&self) -> f64 {
        self.percentage(self.losses)
    }

    /// Share of games drawn, in percent. `0.0` when no games were recorded.
    pub fn draw_percentage(&self) -> f64 {
        self.percentage(self.draws)
    }

    fn percentage(&self, count: u64) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        count as f64 / total as f64 * 100.0
    }
}
