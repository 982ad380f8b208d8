//! Unified error types for chatstats.
//!
//! This module provides a single [`ChatStatsError`] enum that covers all
//! error cases in the library.
//!
//! # Error Handling Philosophy
//!
//! The aggregators are total functions over their inputs except for a small
//! set of terminal failures:
//!
//! - **Per-record rejection is not an error.** A line that doesn't match the
//!   transcript grammar, or a file with an unrecognized extension, is silently
//!   excluded and never aborts a pass.
//! - **Input-shape errors are terminal.** When *nothing* usable is found —
//!   a transcript with zero valid lines, a file list with zero classifiable
//!   files — the aggregator fails with [`Parse`](ChatStatsError::Parse) or
//!   [`NoMediaFound`](ChatStatsError::NoMediaFound). Retrying is the caller's
//!   concern (typically by selecting a different file).
//! - **Arithmetic guards** (percentages, averages) yield `0` rather than
//!   propagate NaN when their denominator is zero, so no error variant exists
//!   for them.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstats operations.
///
/// # Example
///
/// ```rust
/// use chatstats::error::Result;
/// use chatstats::ChatSummary;
///
/// fn my_function() -> Result<Option<ChatSummary>> {
///     // ... operations that may fail
///     Ok(None)
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatStatsError>;

/// The error type for all chatstats operations.
///
/// Each variant contains context about what went wrong and, where applicable,
/// the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatStatsError {
    /// An I/O error occurred while reading input.
    ///
    /// Raised by the file-reading boundary (CLI, callers), never by the
    /// aggregators themselves — they operate on in-memory values only.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No recognizable message lines in the transcript.
    ///
    /// Every line failed the `[DD.MM.YYYY HH:MM:SS] Sender: body` grammar.
    /// An all-noise or wrong-format file is indistinguishable from
    /// "not a chat export".
    #[error("No valid message lines found{}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// No classifiable media files in the input set.
    ///
    /// Every candidate had an extension outside the known image/gif/video
    /// tables. A source with only unknown-typed files is indistinguishable
    /// from "no media".
    #[error("No media files found{}", path.as_ref().map(|p| format!(" (in: {})", p.display())).unwrap_or_default())]
    NoMediaFound {
        /// The scanned path, if available
        path: Option<PathBuf>,
    },

    /// The caller passed an empty or degenerate input set.
    ///
    /// This occurs when:
    /// - The transcript is empty or whitespace-only
    /// - The media candidate list is empty
    #[error("Unsupported input: {reason}")]
    UnsupportedInput {
        /// Description of what's wrong with the input
        reason: String,
    },

    /// UTF-8 encoding error.
    ///
    /// Occurs when input content is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatStatsError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatStatsError::Utf8 {
            context: "input decoding".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatStatsError {
    /// Creates a parse error without a path.
    pub fn parse() -> Self {
        ChatStatsError::Parse { path: None }
    }

    /// Creates a parse error for a specific file.
    pub fn parse_in(path: impl Into<PathBuf>) -> Self {
        ChatStatsError::Parse {
            path: Some(path.into()),
        }
    }

    /// Creates a no-media-found error without a path.
    pub fn no_media_found() -> Self {
        ChatStatsError::NoMediaFound { path: None }
    }

    /// Creates a no-media-found error for a specific directory.
    pub fn no_media_found_in(path: impl Into<PathBuf>) -> Self {
        ChatStatsError::NoMediaFound {
            path: Some(path.into()),
        }
    }

    /// Creates an unsupported-input error.
    pub fn unsupported_input(reason: impl Into<String>) -> Self {
        ChatStatsError::UnsupportedInput {
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatStatsError::Io(_))
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, ChatStatsError::Parse { .. })
    }

    /// Returns `true` if this is a no-media-found error.
    pub fn is_no_media_found(&self) -> bool {
        matches!(self, ChatStatsError::NoMediaFound { .. })
    }

    /// Returns `true` if this is an unsupported-input error.
    pub fn is_unsupported_input(&self) -> bool {
        matches!(self, ChatStatsError::UnsupportedInput { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
