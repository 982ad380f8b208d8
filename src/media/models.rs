//! Media candidate, classified-file and summary types.
//!
//! [`MediaCandidate`] is what the file-reading boundary hands over: name,
//! size, and an explicit dated/undated creation time. The aggregator turns
//! candidates into classified [`MediaFile`]s and finally one immutable
//! [`MediaSummary`].

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Media kind derived from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// jpg, jpeg, png, heic, webp
    Image,
    /// gif
    Gif,
    /// mp4, mov, avi, mkv, webm
    Video,
    /// Anything else. Counted in the file-type histogram, excluded from
    /// kind totals and bucketing.
    Unknown,
}

/// Creation time of a media file, explicit about absence.
///
/// Undated files count toward totals but are routed around day/month
/// bucketing instead of null-checked inside the aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MediaTimestamp {
    /// The file carries a creation time.
    Dated(DateTime<Utc>),
    /// No creation time available.
    Undated,
}

impl MediaTimestamp {
    /// Returns the calendar day, if dated.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            MediaTimestamp::Dated(ts) => Some(ts.date_naive()),
            MediaTimestamp::Undated => None,
        }
    }
}

/// One unclassified media file descriptor from the file-reading boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaCandidate {
    /// File name (not a full path; the name carries the participant
    /// convention).
    pub file_name: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Creation time, if the source exposes one.
    pub created: MediaTimestamp,
}

impl MediaCandidate {
    /// Creates a new candidate.
    pub fn new(file_name: impl Into<String>, size_bytes: u64, created: MediaTimestamp) -> Self {
        Self {
            file_name: file_name.into(),
            size_bytes,
            created,
        }
    }
}

/// One classified media file. Immutable once classified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaFile {
    /// File name as given by the candidate.
    pub file_name: String,
    /// Lowercase extension (may be empty).
    pub extension: String,
    /// Classified kind.
    pub kind: MediaKind,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Creation time.
    pub created: MediaTimestamp,
    /// Participant derived from the filename convention — not
    /// authoritative identity.
    pub participant: String,
}

/// Per-participant media statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantMediaStat {
    /// Image files attributed to this participant.
    pub image_count: u64,
    /// Gif files attributed to this participant.
    pub gif_count: u64,
    /// Video files attributed to this participant.
    pub video_count: u64,
    /// Total bytes across this participant's files.
    pub total_size_bytes: u64,
    /// File count divided by the number of distinct days with dated files;
    /// `0.0` when no file is dated.
    pub average_per_day: f64,
    /// Up to three most active days by file count, ties broken by earlier
    /// date.
    pub most_active_days: Vec<NaiveDate>,
    /// Count per lowercase extension.
    pub file_type_counts: BTreeMap<String, u64>,
}

/// Counts and size for one observed calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMediaStat {
    /// The calendar day.
    pub date: NaiveDate,
    /// Image files created that day.
    pub image_count: u64,
    /// Gif files created that day.
    pub gif_count: u64,
    /// Video files created that day.
    pub video_count: u64,
    /// Total bytes created that day.
    pub total_size_bytes: u64,
}

/// Counts and size for one observed calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyMediaStat {
    /// First day of the month, as the bucket key.
    pub month: NaiveDate,
    /// Image files created that month.
    pub image_count: u64,
    /// Gif files created that month.
    pub gif_count: u64,
    /// Video files created that month.
    pub video_count: u64,
    /// Total bytes created that month.
    pub total_size_bytes: u64,
    /// Bucket item count divided by the number of calendar days in the
    /// month.
    pub average_per_day: f64,
}

/// The aggregate root for one analyzed media bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaSummary {
    /// All candidates, classified or not.
    pub total_files: u64,
    /// Files classified as images.
    pub image_count: u64,
    /// Files classified as gifs.
    pub gif_count: u64,
    /// Files classified as videos.
    pub video_count: u64,
    /// Total bytes across all files, unknown-typed included.
    pub total_size_bytes: u64,
    /// Bytes across image files.
    pub image_size_bytes: u64,
    /// Bytes across gif files.
    pub gif_size_bytes: u64,
    /// Bytes across video files.
    pub video_size_bytes: u64,
    /// Per-participant stats, keyed by derived participant name.
    pub by_participant: BTreeMap<String, ParticipantMediaStat>,
    /// Observed days only, sorted ascending.
    pub daily_stats: Vec<DailyMediaStat>,
    /// Observed months only, sorted ascending.
    pub monthly_stats: Vec<MonthlyMediaStat>,
    /// All files sorted by descending size, top 10. Ties broken by
    /// ascending file name.
    pub largest_files: Vec<MediaFile>,
    /// Count per lowercase extension, including unknown-typed files.
    pub file_type_counts: BTreeMap<String, u64>,
}

impl MediaSummary {
    /// Files classified to a non-unknown kind.
    pub fn classified_count(&self) -> u64 {
        self.image_count + self.gif_count + self.video_count
    }
}
