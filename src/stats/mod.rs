//! Chat-side aggregation: single-pass statistics over transcript records.
//!
//! - [`chat`] — the streaming [`ChatAggregator`](chat::ChatAggregator)
//! - [`models`] — finalized, immutable summary types
//! - [`ranking`] — shared sorted, percentage-annotated top-N lists

pub mod chat;
pub mod models;
pub mod ranking;

pub use chat::ChatAggregator;
pub use models::{
    ChatSummary, DailyStat, EmojiStat, EmojiStats, HourlyStat, ParticipantStat, TimeRange,
    WordStat, WordStats,
};
pub use ranking::{RankedEntry, top_n};
