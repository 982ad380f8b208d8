//! Transcript line grammar.
//!
//! A line matches iff it has the shape `[DD.MM.YYYY HH:MM:SS] Sender: body`
//! with a 24-hour clock. The sender is any run of characters up to the first
//! `:`, trimmed of surrounding whitespace; the body is the remainder of the
//! line, including any further colons.
//!
//! Lines that fail the grammar are rejected silently — multi-line message
//! continuations and system lines are expected noise, not errors.
//!
//! # Example
//!
//! ```
//! use chatstats::LineGrammar;
//!
//! let grammar = LineGrammar::new();
//!
//! let record = grammar
//!     .parse_line("[01.01.2024 10:00:00] Alice: hello 😀")
//!     .unwrap();
//! assert_eq!(record.sender(), "Alice");
//!
//! assert!(grammar.parse_line("not a message line").is_none());
//! ```

use chrono::NaiveDateTime;
use regex::Regex;

use crate::record::MessageRecord;

/// Regex for one transcript line: `[DD.MM.YYYY HH:MM:SS] Sender: body`.
const LINE_PATTERN: &str = r"^\[(\d{2}\.\d{2}\.\d{4} \d{2}:\d{2}:\d{2})\] ([^:]+): (.*)$";

/// Chrono format string matching the bracketed timestamp.
const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Parser for one raw transcript line.
///
/// Compiles its regex once at construction; [`parse_line`](Self::parse_line)
/// is a pure function with no side effects.
#[derive(Debug, Clone)]
pub struct LineGrammar {
    regex: Regex,
}

impl LineGrammar {
    /// Creates a new grammar.
    pub fn new() -> Self {
        Self {
            // The pattern is a verified constant.
            regex: Regex::new(LINE_PATTERN).unwrap(),
        }
    }

    /// Parses one raw line into a [`MessageRecord`], or rejects it.
    ///
    /// Rejection (`None`) covers: timestamp not matching the fixed numeric
    /// format, missing colon-separated sender, sender empty after trimming,
    /// and out-of-range calendar values (e.g. `32.01.2024`). A rejected line
    /// contributes nothing; there is no partial-record recovery.
    pub fn parse_line(&self, line: &str) -> Option<MessageRecord> {
        let caps = self.regex.captures(line)?;

        let timestamp_str = caps.get(1).map_or("", |m| m.as_str());
        let sender = caps.get(2).map_or("", |m| m.as_str()).trim();
        let body = caps.get(3).map_or("", |m| m.as_str());

        if sender.is_empty() {
            return None;
        }

        let timestamp = NaiveDateTime::parse_from_str(timestamp_str, TIMESTAMP_FORMAT)
            .ok()?
            .and_utc();

        Some(MessageRecord::new(timestamp, sender, body))
    }
}

impl Default for LineGrammar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn grammar() -> LineGrammar {
        LineGrammar::new()
    }

    #[test]
    fn test_parse_valid_line() {
        let record = grammar()
            .parse_line("[01.01.2024 10:00:00] Alice: hello 😀")
            .expect("line should parse");

        assert_eq!(record.sender(), "Alice");
        assert_eq!(record.body(), "hello 😀");
        assert_eq!(record.timestamp().year(), 2024);
        assert_eq!(record.timestamp().month(), 1);
        assert_eq!(record.timestamp().day(), 1);
        assert_eq!(record.timestamp().hour(), 10);
    }

    #[test]
    fn test_body_keeps_further_colons() {
        let record = grammar()
            .parse_line("[15.06.2024 22:15:30] Bob: note: see https://example.com")
            .unwrap();
        assert_eq!(record.sender(), "Bob");
        assert_eq!(record.body(), "note: see https://example.com");
    }

    #[test]
    fn test_sender_is_trimmed() {
        let record = grammar()
            .parse_line("[15.06.2024 22:15:30]   Alice  : hi")
            .unwrap();
        assert_eq!(record.sender(), "Alice");
    }

    #[test]
    fn test_rejects_continuation_line() {
        // Second line of a multi-line message: expected noise, not an error.
        assert!(grammar().parse_line("and this is the rest of it").is_none());
    }

    #[test]
    fn test_rejects_missing_sender_colon() {
        assert!(
            grammar()
                .parse_line("[01.01.2024 10:00:00] no sender here")
                .is_none()
        );
    }

    #[test]
    fn test_rejects_wrong_timestamp_shape() {
        // US-style slashes don't match the fixed dotted format.
        assert!(
            grammar()
                .parse_line("[1/15/24, 10:30:45 AM] Alice: Hello")
                .is_none()
        );
        // Missing seconds.
        assert!(
            grammar()
                .parse_line("[01.01.2024 10:00] Alice: Hello")
                .is_none()
        );
    }

    #[test]
    fn test_rejects_out_of_range_date() {
        assert!(
            grammar()
                .parse_line("[32.01.2024 10:00:00] Alice: Hello")
                .is_none()
        );
        assert!(
            grammar()
                .parse_line("[01.13.2024 10:00:00] Alice: Hello")
                .is_none()
        );
        assert!(
            grammar()
                .parse_line("[01.01.2024 25:00:00] Alice: Hello")
                .is_none()
        );
    }

    #[test]
    fn test_rejects_empty_line() {
        assert!(grammar().parse_line("").is_none());
        assert!(grammar().parse_line("   ").is_none());
    }

    #[test]
    fn test_empty_body_is_accepted() {
        let record = grammar().parse_line("[01.01.2024 10:00:00] Alice: ").unwrap();
        assert_eq!(record.body(), "");
    }

    #[test]
    fn test_unicode_sender() {
        let record = grammar()
            .parse_line("[01.01.2024 10:00:00] Мария Петрова: Привет")
            .unwrap();
        assert_eq!(record.sender(), "Мария Петрова");
    }
}
