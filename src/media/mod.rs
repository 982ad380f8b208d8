//! Media classification and aggregation.
//!
//! Independent of the chat pipeline: a flat list of `(file name, size,
//! creation time)` descriptors flows in, a [`MediaSummary`] flows out.
//!
//! - [`classify`] — extension table and filename-convention participant
//!   extraction
//! - [`models`] — candidate, classified-file and summary types
//! - [`aggregate`] — the single-pass [`MediaAggregator`]

pub mod aggregate;
pub mod classify;
pub mod models;

pub use aggregate::MediaAggregator;
pub use classify::{UNKNOWN_PARTICIPANT, extension_of, participant_from_filename};
pub use models::{
    DailyMediaStat, MediaCandidate, MediaFile, MediaKind, MediaSummary, MediaTimestamp,
    MonthlyMediaStat, ParticipantMediaStat,
};
