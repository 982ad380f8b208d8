//! # Chatstats
//!
//! A Rust library that turns exported chat transcripts and media bundles
//! into deterministic statistical summaries.
//!
//! ## Overview
//!
//! Chatstats has two independent pipelines:
//!
//! - **Chat** — raw transcript text flows through [`LineGrammar`] (one record
//!   per valid line), the [`ChatAggregator`] consumes the record stream in a
//!   single pass and emits an immutable [`ChatSummary`]: message/word/emoji
//!   frequencies per participant, per day, per hour, plus ranked top-N tables.
//! - **Media** — a flat list of file descriptors flows through the extension
//!   classifier into the [`MediaAggregator`], which emits a [`MediaSummary`]:
//!   counts and sizes by kind, participant, day and month.
//!
//! Both aggregators are pure functions of their inputs: re-running the same
//! input yields an identical summary.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstats::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let transcript = "\
//! [01.01.2024 10:00:00] Alice: hello 😀
//! [01.01.2024 10:05:00] Bob: hi";
//!
//!     let summary = ChatAggregator::new().aggregate(transcript)?;
//!
//!     assert_eq!(summary.total_messages, 2);
//!     assert_eq!(summary.emoji_stats.total_count, 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Media analysis
//!
//! ```rust
//! use chatstats::media::{MediaAggregator, MediaCandidate, MediaTimestamp};
//!
//! let files = vec![
//!     MediaCandidate::new("2024-01-01 - Alice.jpg", 2048, MediaTimestamp::Undated),
//!     MediaCandidate::new("VID-0001 - Bob.mp4", 1_000_000, MediaTimestamp::Undated),
//! ];
//!
//! let summary = MediaAggregator::new().aggregate(files)?;
//! assert_eq!(summary.image_count, 1);
//! assert_eq!(summary.video_count, 1);
//! # Ok::<(), chatstats::ChatStatsError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`grammar`] — [`LineGrammar`], the `[DD.MM.YYYY HH:MM:SS] Sender: body`
//!   line parser
//! - [`record`] — [`MessageRecord`], the transient parsed-line type
//! - [`tokenize`] — [`Tokenizer`], emoji and word scans over message bodies
//! - [`stats`] — chat aggregation
//!   - [`stats::chat`] — [`ChatAggregator`]
//!   - [`stats::models`] — [`ChatSummary`] and friends
//!   - [`stats::ranking`] — shared sorted, percentage-annotated top-N lists
//! - [`media`] — media classification and aggregation
//!   - [`media::classify`] — [`MediaKind`](media::MediaKind) extension table,
//!     filename-convention participant extraction
//!   - [`media::aggregate`] — [`MediaAggregator`]
//! - [`cli`] — CLI types (feature `cli`)
//! - [`error`] — unified error types ([`ChatStatsError`], [`Result`])
//! - [`prelude`] — convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod error;
pub mod grammar;
pub mod media;
pub mod record;
pub mod stats;
pub mod tokenize;

// Re-export the main types at the crate root for convenience
pub use error::{ChatStatsError, Result};
pub use grammar::LineGrammar;
pub use record::MessageRecord;
pub use stats::chat::ChatAggregator;
pub use stats::models::ChatSummary;
pub use tokenize::Tokenizer;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{ChatStatsError, Result};

    // Chat pipeline
    pub use crate::grammar::LineGrammar;
    pub use crate::record::MessageRecord;
    pub use crate::stats::chat::ChatAggregator;
    pub use crate::stats::models::{
        ChatSummary, DailyStat, EmojiStat, EmojiStats, HourlyStat, ParticipantStat, TimeRange,
        WordStat, WordStats,
    };
    pub use crate::stats::ranking::{RankedEntry, top_n};
    pub use crate::tokenize::Tokenizer;

    // Media pipeline
    pub use crate::media::{
        DailyMediaStat, MediaAggregator, MediaCandidate, MediaFile, MediaKind, MediaSummary,
        MediaTimestamp, MonthlyMediaStat, ParticipantMediaStat,
    };
}
