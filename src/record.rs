//! The transient per-line message record.
//!
//! This module provides [`MessageRecord`], the normalized representation of
//! one accepted transcript line. The [`LineGrammar`](crate::LineGrammar)
//! produces one record per valid line; the
//! [`ChatAggregator`](crate::ChatAggregator) consumes it immediately.
//! Records are never persisted standalone.
//!
//! # Examples
//!
//! ```
//! use chatstats::MessageRecord;
//! use chrono::{TimeZone, Utc};
//!
//! let ts = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
//! let record = MessageRecord::new(ts, "Alice", "hello 😀");
//!
//! assert_eq!(record.sender(), "Alice");
//! assert_eq!(record.body(), "hello 😀");
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One parsed transcript line.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `DateTime<Utc>` | When the message was sent |
/// | `sender` | `String` | Display name of the message author, trimmed |
/// | `body` | `String` | Message text, including any further colons |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// When the message was sent.
    pub timestamp: DateTime<Utc>,

    /// Display name of the message author.
    pub sender: String,

    /// Text content of the message.
    pub body: String,
}

impl MessageRecord {
    /// Creates a new record.
    pub fn new(
        timestamp: DateTime<Utc>,
        sender: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            body: body.into(),
        }
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the body length in Unicode scalar values.
    ///
    /// This is the length that feeds per-participant average message length.
    pub fn body_chars(&self) -> usize {
        self.body.chars().count()
    }
}
