//! # Pigeonstats
//!
//! Parse iMessage transcript exports and count GamePigeon game results.
//!
//! ## Overview
//!
//! iMessage conversations exported to plain text render each message as a
//! timestamp line, a sender line, then the message body. GamePigeon game
//! results show up as a literal `GamePigeon message:` line followed by
//! the result (`I won!`, `You Won!` or `Draw!`), phrased from the
//! sender's point of view. This crate scans such a transcript, resolves
//! each result to a win, loss or draw for the transcript owner, and
//! produces aggregate counts plus a time-ordered outcome sequence.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pigeonstats::parser::TranscriptParser;
//! use pigeonstats::report::Report;
//!
//! fn main() -> pigeonstats::Result<()> {
//!     let parser = TranscriptParser::new();
//!     let summary = parser.parse("messages.txt".as_ref())?;
//!
//!     println!("{}", Report::new(&summary));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — the transcript scanner
//!   - [`TranscriptParser`](parser::TranscriptParser) — single-pass line parser
//! - [`config`] — parser configuration
//!   - [`ParserConfig`](config::ParserConfig) — self-identity override
//! - [`outcome`] — [`Outcome`], [`TimestampedOutcome`]
//! - [`summary`] — [`Summary`] counts and timeline
//! - [`report`] — text report rendering ([`Report`](report::Report))
//! - [`series`] — cumulative counts and windowed win rate
//! - [`chart`] — PNG chart rendering (requires the `plot` feature)
//! - [`cli`] — CLI types (requires the `cli` feature)
//! - [`error`] — unified error types ([`PigeonstatsError`], [`Result`])

pub mod config;
pub mod error;
pub mod outcome;
pub mod parser;
pub mod report;
pub mod series;
pub mod summary;

#[cfg(feature = "plot")]
pub mod chart;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export the main types at the crate root for convenience
pub use error::{PigeonstatsError, Result};
pub use outcome::{Outcome, TimestampedOutcome};
pub use summary::Summary;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use pigeonstats::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::ParserConfig;
    pub use crate::error::{PigeonstatsError, Result};
    pub use crate::outcome::{Outcome, TimestampedOutcome};
    pub use crate::parser::TranscriptParser;
    pub use crate::report::Report;
    pub use crate::series::{cumulative_counts, windowed_win_rate, WIN_RATE_WINDOW};
    pub use crate::summary::Summary;
}
