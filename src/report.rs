//! Human-readable summary rendering.

use std::fmt;

use crate::summary::Summary;

/// Text report over a [`Summary`].
///
/// Renders total games, per-outcome counts and percentages. Percentages
/// are all `0.0` when no games were recorded.
///
/// # Example
///
/// ```
/// use pigeonstats::parser::TranscriptParser;
/// use pigeonstats::report::Report;
///
/// let summary = TranscriptParser::new()
///     .parse_str("Jan 1, 2024 10:00:00 AM\nMe\nGamePigeon message:\nI won!");
/// let text = Report::new(&summary).to_string();
/// assert!(text.contains("Total games played: 1"));
/// ```
pub struct Report<'a> {
    summary: &'a Summary,
}

impl<'a> Report<'a> {
    /// Creates a report over a summary.
    pub fn new(summary: &'a Summary) -> Self {
        Self { summary }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.summary;
        writeln!(f, "📊 GamePigeon Results Summary 📊")?;
        writeln!(f, "Total games played: {}", s.total())?;
        writeln!(f, "Wins: {}", s.wins)?;
        writeln!(f, "Losses: {}", s.losses)?;
        writeln!(f, "Draws: {}", s.draws)?;
        writeln!(f, "Win percentage: {:.1}%", s.win_percentage())?;
        writeln!(f, "Loss percentage: {:.1}%", s.loss_percentage())?;
        write!(f, "Draw percentage: {:.1}%", s.draw_percentage())
    }
}
