//! Unified error types for pigeonstats.
//!
//! This module provides a single [`PigeonstatsError`] enum that covers all
//! error cases in the library.
//!
//! Failures are file-level only: a missing input, an unreadable input, or
//! undecodable content. Malformed individual transcript lines are never
//! errors; the parser tolerates them and counts what it can.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for pigeonstats operations.
pub type Result<T> = std::result::Result<T, PigeonstatsError>;

/// The error type for all pigeonstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PigeonstatsError {
    /// The input transcript file does not exist.
    #[error("File '{}' not found", path.display())]
    FileNotFound {
        /// The path that failed to resolve
        path: PathBuf,
    },

    /// Any other I/O failure while reading the transcript.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Transcript content is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Chart rendering failure.
    #[cfg(feature = "plot")]
    #[error("Chart error: {0}")]
    Chart(String),
}

impl PigeonstatsError {
    /// Creates a file-not-found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        PigeonstatsError::FileNotFound { path: path.into() }
    }

    /// Creates a chart rendering error.
    #[cfg(feature = "plot")]
    pub fn chart(message: impl Into<String>) -> Self {
        PigeonstatsError::Chart(message.into())
    }

    /// Returns `true` if the input file did not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PigeonstatsError::FileNotFound { .. })
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, PigeonstatsError::Io(_))
    }
}
