//! iMessage TXT export parser.
//!
//! Exports render one message per block: a timestamp line, the sender on
//! the following line, then the message body. GamePigeon result cards
//! come through as a literal `GamePigeon message:` line followed by the
//! result text, phrased from the sender's point of view.
//!
//! The parser makes a single forward pass over the lines, tracking the
//! current sender and timestamp, and resolves each result line into an
//! [`Outcome`] for the transcript owner.

use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;

use crate::config::ParserConfig;
use crate::error::{PigeonstatsError, Result};
use crate::outcome::Outcome;
use crate::summary::Summary;

/// Marker line announcing a GamePigeon result card.
const GAME_MARKER: &str = "GamePigeon message:";

/// Result line meaning the message's sender won.
const SENDER_WON: &str = "I won!";

/// Result line meaning the message's receiver won.
const RECEIVER_WON: &str = "You Won!";

/// Result line for a drawn game.
const DRAW: &str = "Draw!";

/// Timestamp line layouts seen in exports.
///
/// The second layout differs only in the exact two-space separator some
/// exports emit between date and time on message-group boundaries; the
/// first already covers it via `\s+`, but both are tried.
const TIMESTAMP_PATTERN: &str = r"^\w{3}\s\d{1,2},\s\d{4}\s+\d{1,2}:\d{2}:\d{2}\s[AP]M";
const TIMESTAMP_PATTERN_GROUPED: &str = r"^\w{3}\s\d{1,2},\s\d{4}\s\s\d{1,2}:\d{2}:\d{2}\s[AP]M";

/// Date-time conventions tried against a matched timestamp line:
/// month-name-first, then weekday-name-first.
const DATE_FORMATS: &[&str] = &["%b %d, %Y %I:%M:%S %p", "%a %d, %Y %I:%M:%S %p"];

/// Parser for iMessage TXT exports containing GamePigeon results.
///
/// # Example
///
/// ```rust,no_run
/// use pigeonstats::parser::TranscriptParser;
///
/// let parser = TranscriptParser::new();
/// let summary = parser.parse("messages.txt".as_ref())?;
/// println!("{} wins, {} losses", summary.wins, summary.losses);
/// # Ok::<(), pigeonstats::PigeonstatsError>(())
/// ```
pub struct TranscriptParser {
    config: ParserConfig,
    timestamp: Regex,
    timestamp_grouped: Regex,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            timestamp: Regex::new(TIMESTAMP_PATTERN).unwrap(),
            timestamp_grouped: Regex::new(TIMESTAMP_PATTERN_GROUPED).unwrap(),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a transcript file and returns the extracted summary.
    ///
    /// Fails only at the file level: a missing path, an unreadable file,
    /// or content that is not valid UTF-8. Lines that don't match any
    /// recognized shape are tolerated, never errors.
    pub fn parse(&self, path: &Path) -> Result<Summary> {
        let bytes = fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PigeonstatsError::file_not_found(path)
            } else {
                PigeonstatsError::Io(e)
            }
        })?;

        let content = String::from_utf8(bytes).map_err(|source| PigeonstatsError::Utf8 {
            context: format!("reading '{}'", path.display()),
            source,
        })?;

        Ok(self.parse_str(&content))
    }

    /// Parses transcript content from a string.
    ///
    /// Infallible: the scan counts what it recognizes and skips the rest.
    pub fn parse_str(&self, content: &str) -> Summary {
        let lines: Vec<&str> = content.lines().collect();

        let mut summary = Summary::default();
        let mut current_sender: Option<&str> = None;
        let mut current_timestamp: Option<DateTime<Utc>> = None;
        let mut awaiting_result = false;

        for (i, raw) in lines.iter().enumerate() {
            let line = raw.trim();

            // A timestamp line starts a new message block. The next line
            // carries the sender for everything until the next timestamp.
            if let Some(matched) = self.match_timestamp(line) {
                current_timestamp = parse_timestamp(matched);
                if let Some(next) = lines.get(i + 1) {
                    current_sender = Some(next.trim());
                }
                awaiting_result = false;
            }

            if line == GAME_MARKER {
                awaiting_result = true;
                continue;
            }

            if awaiting_result && i > 0 {
                let outcome = match line {
                    SENDER_WON => Some(self.attribute(current_sender, true)),
                    RECEIVER_WON => Some(self.attribute(current_sender, false)),
                    DRAW => Some(Outcome::Draw),
                    // Result may appear on a later line within the block.
                    _ => None,
                };

                if let Some(outcome) = outcome {
                    summary.record(outcome, current_timestamp);
                    awaiting_result = false;
                }
            }
        }

        summary.finish()
    }

    /// Returns the matched timestamp prefix of a line, if any.
    fn match_timestamp<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.timestamp
            .find(line)
            .or_else(|| self.timestamp_grouped.find(line))
            .map(|m| m.as_str())
    }

    /// Resolves a result line into the transcript owner's outcome.
    ///
    /// The export phrases results relative to the sender, so attribution
    /// flips polarity depending on whether the current block's sender is
    /// the self identity.
    fn attribute(&self, sender: Option<&str>, sender_won: bool) -> Outcome {
        let is_self = sender == Some(self.config.self_identity.as_str());
        if is_self == sender_won {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }
}

impl Default for TranscriptParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a matched timestamp string into a UTC date-time.
///
/// Separator runs are collapsed first so the two-space layout hits the
/// same formats. Returns `None` when neither convention parses; the
/// caller records the timestamp as absent rather than failing.
fn parse_timestamp(matched: &str) -> Option<DateTime<Utc>> {
    let squashed = matched.split_whitespace().collect::<Vec<_>>().join(" ");

    for format in DATE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&squashed, format) {
            return Some(naive.and_utc());
        }
    }

    None
}
