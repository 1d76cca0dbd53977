//! Game outcome types.
//!
//! This module provides [`Outcome`], the result of a single finished game
//! seen from the transcript owner's side, and [`TimestampedOutcome`], an
//! outcome paired with the timestamp of the message block it came from.
//!
//! # Example
//!
//! ```
//! use pigeonstats::outcome::{Outcome, TimestampedOutcome};
//! use chrono::Utc;
//!
//! let entry = TimestampedOutcome::new(Utc::now(), Outcome::Win);
//! assert!(entry.outcome.is_win());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of one finished game, from the transcript owner's perspective.
///
/// The export phrases results relative to whoever sent the message
/// (`"I won!"`, `"You Won!"`), so the parser resolves the polarity before
/// an `Outcome` is ever produced. A `Win` here is always a win for the
/// transcript owner, regardless of which side announced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The transcript owner won the game.
    Win,

    /// The transcript owner lost the game.
    Loss,

    /// The game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns `true` for [`Outcome::Win`].
    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Win)
    }

    /// Returns `true` for [`Outcome::Loss`].
    pub fn is_loss(&self) -> bool {
        matches!(self, Outcome::Loss)
    }

    /// Returns `true` for [`Outcome::Draw`].
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "win"),
            Outcome::Loss => write!(f, "loss"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// An outcome together with when the enclosing message block was sent.
///
/// Only outcomes whose message block carried a parseable timestamp are
/// represented this way; undated outcomes still count toward aggregate
/// totals but never appear in the time-ordered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimestampedOutcome {
    /// Timestamp of the message block announcing the result.
    pub timestamp: DateTime<Utc>,

    /// The resolved outcome.
    pub outcome: Outcome,
}

impl TimestampedOutcome {
    /// Creates a new timestamped outcome.
    pub fn new(timestamp: DateTime<Utc>, outcome: Outcome) -> Self {
        Self { timestamp, outcome }
    }
}
