//! Finalized chat summary types.
//!
//! All types here are immutable values produced once by the
//! [`ChatAggregator`](super::chat::ChatAggregator) at the end of its pass.
//! Maps use `BTreeMap` so identical input serializes bit-identically.
//!
//! Invariants guaranteed by the aggregator:
//!
//! - `sum(participant.message_count) == total_messages ==
//!   sum(daily.message_count) == sum(hourly.message_count)`
//! - the hourly series always has exactly 24 entries, hours 0..=23
//! - the daily series only has entries for observed days, sorted ascending
//! - percentages are in `[0, 100]` and `0` when the scope total is `0`

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Observed time range: min/max timestamp across accepted records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Earliest accepted timestamp.
    pub start: DateTime<Utc>,
    /// Latest accepted timestamp.
    pub end: DateTime<Utc>,
}

/// One emoji with its count and share of the scope total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmojiStat {
    /// The emoji token (possibly a multi-codepoint sequence).
    pub emoji: String,
    /// Occurrences within the scope.
    pub count: u64,
    /// `count / scope_total * 100`; `0.0` when the scope is empty.
    pub percentage: f64,
}

/// One word with its count and share of the scope total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordStat {
    /// The lower-cased word token.
    pub word: String,
    /// Occurrences within the scope.
    pub count: u64,
    /// `count / scope_total * 100`; `0.0` when the scope is empty.
    pub percentage: f64,
}

/// Per-participant statistics, accumulated additively over the pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantStat {
    /// Display name as it appears in the transcript.
    pub name: String,
    /// Messages sent by this participant.
    pub message_count: u64,
    /// Word tokens across all of this participant's messages.
    pub word_count: u64,
    /// Emoji tokens across all of this participant's messages.
    pub emoji_count: u64,
    /// Total body length in chars divided by message count.
    pub average_message_length: f64,
    /// This participant's top-10 emoji.
    pub top_emojis: Vec<EmojiStat>,
    /// This participant's top-20 words.
    pub top_words: Vec<WordStat>,
}

/// Message count for one observed calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStat {
    /// The calendar day.
    pub date: NaiveDate,
    /// Messages on that day.
    pub message_count: u64,
}

/// Message count for one hour of the day.
///
/// The finalized series is dense: all 24 hours are present, zero-filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyStat {
    /// Hour of day, `0..=23`.
    pub hour: u32,
    /// Messages in that hour across the whole transcript.
    pub message_count: u64,
}

/// Corpus-wide emoji statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmojiStats {
    /// Total emoji tokens across the corpus.
    pub total_count: u64,
    /// Global top-10 emoji.
    pub top_emojis: Vec<EmojiStat>,
    /// Each participant's top-10 emoji, keyed by name.
    pub by_participant: BTreeMap<String, Vec<EmojiStat>>,
}

/// Corpus-wide word statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordStats {
    /// Total word tokens across the corpus.
    pub total_count: u64,
    /// Number of distinct word keys across the corpus.
    pub unique_count: u64,
    /// Global top-20 words.
    pub top_words: Vec<WordStat>,
    /// Each participant's top-20 words, keyed by name.
    pub by_participant: BTreeMap<String, Vec<WordStat>>,
}

/// The aggregate root for one analyzed transcript.
///
/// Participants are sorted by descending message count; ties keep the order
/// in which senders first appeared in the transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSummary {
    /// Label for the chat, typically derived from the source file name.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub chat_name: Option<String>,
    /// Total accepted messages.
    pub total_messages: u64,
    /// Total word tokens.
    pub total_words: u64,
    /// Min/max timestamp over accepted records.
    pub time_range: TimeRange,
    /// Per-participant stats, sorted by descending message count.
    pub participants: Vec<ParticipantStat>,
    /// Observed days only, sorted ascending.
    pub daily_stats: Vec<DailyStat>,
    /// Dense 24-entry series, hours 0..=23.
    pub hourly_stats: Vec<HourlyStat>,
    /// Global and per-participant emoji tables.
    pub emoji_stats: EmojiStats,
    /// Global and per-participant word tables.
    pub word_stats: WordStats,
}

impl ChatSummary {
    /// Returns the number of distinct participants.
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Builder method to attach a chat label.
    #[must_use]
    pub fn with_chat_name(mut self, name: impl Into<String>) -> Self {
        self.chat_name = Some(name.into());
        self
    }
}
