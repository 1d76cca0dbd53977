//! Configuration types for transcript parsing.
//!
//! # Example
//!
//! ```rust
//! use pigeonstats::config::ParserConfig;
//! use pigeonstats::parser::TranscriptParser;
//!
//! let config = ParserConfig::new().with_self_identity("Yo");
//! let parser = TranscriptParser::with_config(config);
//! # let _ = parser;
//! ```

use serde::{Deserialize, Serialize};

/// Sender name iMessage exports use for the transcript owner.
pub const DEFAULT_SELF_IDENTITY: &str = "Me";

/// Configuration for transcript parsing.
///
/// The only knob is the self identity: the sender name the export uses
/// for the transcript owner. English exports always use `"Me"`, which is
/// the default; exports produced under another locale may differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Sender name treated as the transcript owner (default: `"Me"`)
    pub self_identity: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            self_identity: DEFAULT_SELF_IDENTITY.to_string(),
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sender name treated as the transcript owner.
    #[must_use]
    pub fn with_self_identity(mut self, identity: impl Into<String>) -> Self {
        self.self_identity = identity.into();
        self
    }
}
