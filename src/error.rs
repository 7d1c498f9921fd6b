//! Error types for wnram.
//!
//! Every fallible operation in the crate returns [`Result`], whose error type
//! is [`WordNetError`]. Loading is all-or-nothing: the first format,
//! integrity or I/O error aborts the whole load and no partial database is
//! returned.
//!
//! # Examples
//!
//! ```
//! use wnram::error::{Result, WordNetError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordNetError::query("empty search text"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for wnram operations.
#[derive(Error, Debug)]
pub enum WordNetError {
    /// A line violated the record grammar (missing field, malformed number,
    /// unknown relation symbol, unknown part of speech, missing gloss).
    #[error("Format error at {source_name}:{line}: {message}")]
    Format {
        /// Name of the file (or reader) the line came from.
        source_name: String,
        /// 1-based line number.
        line: u64,
        /// What went wrong.
        message: String,
    },

    /// The parsed records do not form a consistent graph.
    #[error("Integrity error: {0}")]
    Integrity(String),

    /// I/O errors while reading the source files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed query parameters.
    #[error("Query error: {0}")]
    Query(String),

    /// Invalid or unreadable configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with WordNetError.
pub type Result<T> = std::result::Result<T, WordNetError>;

/// Placeholder source name used until the loader attaches the real one.
pub(crate) const UNKNOWN_SOURCE: &str = "<input>";

impl WordNetError {
    /// Create a new format error for the given line.
    ///
    /// The source name is filled in later by [`WordNetError::in_source`].
    pub fn format<S: Into<String>>(line: u64, msg: S) -> Self {
        WordNetError::Format {
            source_name: UNKNOWN_SOURCE.to_string(),
            line,
            message: msg.into(),
        }
    }

    /// Create a new integrity error.
    pub fn integrity<S: Into<String>>(msg: S) -> Self {
        WordNetError::Integrity(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        WordNetError::Query(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        WordNetError::Config(msg.into())
    }

    /// Attach a source name to a format error. Other variants pass through.
    pub fn in_source(self, name: &str) -> Self {
        match self {
            WordNetError::Format { line, message, .. } => WordNetError::Format {
                source_name: name.to_string(),
                line,
                message,
            },
            other => other,
        }
    }

    /// Whether this error was raised by the line grammar.
    pub fn is_format(&self) -> bool {
        matches!(self, WordNetError::Format { .. })
    }

    /// Whether this error was raised by a graph consistency check.
    pub fn is_integrity(&self) -> bool {
        matches!(self, WordNetError::Integrity(_))
    }
}
