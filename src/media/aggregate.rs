//! Single-pass media aggregation.
//!
//! The [`MediaAggregator`] classifies every candidate, then builds all
//! participant/day/month statistics in one pass over the classified list.
//! Accumulators are local to the call; re-running the same input yields an
//! identical summary.
//!
//! Unknown-typed files count in the file-type histogram, total size and the
//! largest-files list, but are excluded from kind totals and from
//! participant/day/month bucketing. Undated files count toward totals but
//! skip the day and month buckets.
//!
//! # Example
//!
//! ```
//! use chatstats::media::{MediaAggregator, MediaCandidate, MediaTimestamp};
//!
//! let files = vec![
//!     MediaCandidate::new("2024-01-01 - Alice.jpg", 2048, MediaTimestamp::Undated),
//! ];
//! let summary = MediaAggregator::new().aggregate(files)?;
//!
//! assert_eq!(summary.image_count, 1);
//! assert!(summary.by_participant.contains_key("Alice"));
//! # Ok::<(), chatstats::ChatStatsError>(())
//! ```

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};

use crate::error::{ChatStatsError, Result};

use super::classify::{extension_of, participant_from_filename};
use super::models::{
    DailyMediaStat, MediaCandidate, MediaFile, MediaKind, MediaSummary, MonthlyMediaStat,
    ParticipantMediaStat,
};

/// The largest-files list keeps the 10 biggest files.
const TOP_LARGEST: usize = 10;

/// Each participant reports up to 3 most active days.
const TOP_ACTIVE_DAYS: usize = 3;

/// Builds a [`MediaSummary`] from a flat candidate list.
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaAggregator;

/// Running counters for one participant.
#[derive(Debug, Default)]
struct ParticipantAccumulator {
    image_count: u64,
    gif_count: u64,
    video_count: u64,
    total_size_bytes: u64,
    file_count: u64,
    file_type_counts: BTreeMap<String, u64>,
    files_per_day: HashMap<NaiveDate, u64>,
}

/// Running counters for one day or month bucket.
#[derive(Debug, Default)]
struct BucketAccumulator {
    image_count: u64,
    gif_count: u64,
    video_count: u64,
    total_size_bytes: u64,
    item_count: u64,
}

impl BucketAccumulator {
    fn observe(&mut self, kind: MediaKind, size_bytes: u64) {
        match kind {
            MediaKind::Image => self.image_count += 1,
            MediaKind::Gif => self.gif_count += 1,
            MediaKind::Video => self.video_count += 1,
            MediaKind::Unknown => {}
        }
        self.total_size_bytes += size_bytes;
        self.item_count += 1;
    }
}

impl MediaAggregator {
    /// Creates a new aggregator.
    pub fn new() -> Self {
        Self
    }

    /// Classifies one candidate into a [`MediaFile`].
    ///
    /// Pure and total; never fails. Exposed so callers can classify without
    /// aggregating.
    pub fn classify(&self, candidate: MediaCandidate) -> MediaFile {
        let extension = extension_of(&candidate.file_name);
        let kind = MediaKind::detect(&extension);
        let participant = participant_from_filename(&candidate.file_name);

        MediaFile {
            file_name: candidate.file_name,
            extension,
            kind,
            size_bytes: candidate.size_bytes,
            created: candidate.created,
            participant,
        }
    }

    /// Aggregates a candidate list into a summary.
    ///
    /// # Errors
    ///
    /// - [`ChatStatsError::UnsupportedInput`] when the candidate list is
    ///   empty.
    /// - [`ChatStatsError::NoMediaFound`] when no candidate classifies to a
    ///   non-unknown kind.
    pub fn aggregate(&self, candidates: Vec<MediaCandidate>) -> Result<MediaSummary> {
        if candidates.is_empty() {
            return Err(ChatStatsError::unsupported_input(
                "empty media file list".to_string(),
            ));
        }

        let files: Vec<MediaFile> = candidates
            .into_iter()
            .map(|candidate| self.classify(candidate))
            .collect();

        if !files.iter().any(|f| f.kind != MediaKind::Unknown) {
            return Err(ChatStatsError::no_media_found());
        }

        let mut total_size_bytes = 0u64;
        let mut image_count = 0u64;
        let mut gif_count = 0u64;
        let mut video_count = 0u64;
        let mut image_size_bytes = 0u64;
        let mut gif_size_bytes = 0u64;
        let mut video_size_bytes = 0u64;
        let mut file_type_counts: BTreeMap<String, u64> = BTreeMap::new();
        let mut participants: BTreeMap<String, ParticipantAccumulator> = BTreeMap::new();
        let mut daily: HashMap<NaiveDate, BucketAccumulator> = HashMap::new();
        let mut monthly: HashMap<NaiveDate, BucketAccumulator> = HashMap::new();

        for file in &files {
            total_size_bytes += file.size_bytes;
            *file_type_counts.entry(file.extension.clone()).or_insert(0) += 1;

            match file.kind {
                MediaKind::Image => {
                    image_count += 1;
                    image_size_bytes += file.size_bytes;
                }
                MediaKind::Gif => {
                    gif_count += 1;
                    gif_size_bytes += file.size_bytes;
                }
                MediaKind::Video => {
                    video_count += 1;
                    video_size_bytes += file.size_bytes;
                }
                // Histogram and size only; no kind totals, no bucketing.
                MediaKind::Unknown => continue,
            }

            let participant = participants.entry(file.participant.clone()).or_default();
            participant.file_count += 1;
            participant.total_size_bytes += file.size_bytes;
            *participant
                .file_type_counts
                .entry(file.extension.clone())
                .or_insert(0) += 1;
            match file.kind {
                MediaKind::Image => participant.image_count += 1,
                MediaKind::Gif => participant.gif_count += 1,
                MediaKind::Video => participant.video_count += 1,
                MediaKind::Unknown => {}
            }

            // Undated files stay out of day/month buckets entirely.
            if let Some(date) = file.created.date() {
                *participant.files_per_day.entry(date).or_insert(0) += 1;
                daily.entry(date).or_default().observe(file.kind, file.size_bytes);
                monthly
                    .entry(first_of_month(date))
                    .or_default()
                    .observe(file.kind, file.size_bytes);
            }
        }

        let by_participant = participants
            .into_iter()
            .map(|(name, acc)| (name, finalize_participant(acc)))
            .collect();

        let mut daily_stats: Vec<DailyMediaStat> = daily
            .into_iter()
            .map(|(date, bucket)| DailyMediaStat {
                date,
                image_count: bucket.image_count,
                gif_count: bucket.gif_count,
                video_count: bucket.video_count,
                total_size_bytes: bucket.total_size_bytes,
            })
            .collect();
        daily_stats.sort_by_key(|d| d.date);

        let mut monthly_stats: Vec<MonthlyMediaStat> = monthly
            .into_iter()
            .map(|(month, bucket)| MonthlyMediaStat {
                month,
                image_count: bucket.image_count,
                gif_count: bucket.gif_count,
                video_count: bucket.video_count,
                total_size_bytes: bucket.total_size_bytes,
                average_per_day: bucket.item_count as f64 / f64::from(days_in_month(month)),
            })
            .collect();
        monthly_stats.sort_by_key(|m| m.month);

        let largest_files = largest(files);

        Ok(MediaSummary {
            total_files: file_type_counts.values().sum(),
            image_count,
            gif_count,
            video_count,
            total_size_bytes,
            image_size_bytes,
            gif_size_bytes,
            video_size_bytes,
            by_participant,
            daily_stats,
            monthly_stats,
            largest_files,
            file_type_counts,
        })
    }
}

/// Sorts all files by descending size (ties: ascending name), keeps the top.
fn largest(mut files: Vec<MediaFile>) -> Vec<MediaFile> {
    files.sort_by(|a, b| {
        b.size_bytes
            .cmp(&a.size_bytes)
            .then_with(|| a.file_name.cmp(&b.file_name))
    });
    files.truncate(TOP_LARGEST);
    files
}

fn finalize_participant(acc: ParticipantAccumulator) -> ParticipantMediaStat {
    let distinct_days = acc.files_per_day.len() as u64;
    let average_per_day = if distinct_days == 0 {
        0.0
    } else {
        acc.file_count as f64 / distinct_days as f64
    };

    // Most active days: by count descending, earlier date wins ties.
    let mut days: Vec<(NaiveDate, u64)> = acc.files_per_day.into_iter().collect();
    days.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    let most_active_days = days
        .into_iter()
        .take(TOP_ACTIVE_DAYS)
        .map(|(date, _)| date)
        .collect();

    ParticipantMediaStat {
        image_count: acc.image_count,
        gif_count: acc.gif_count,
        video_count: acc.video_count,
        total_size_bytes: acc.total_size_bytes,
        average_per_day,
        most_active_days,
        file_type_counts: acc.file_type_counts,
    }
}

/// First day of `date`'s month, used as the monthly bucket key.
fn first_of_month(date: NaiveDate) -> NaiveDate {
    // Day 1 always exists.
    date.with_day(1).unwrap()
}

/// Number of calendar days in the month containing `month`.
fn days_in_month(month: NaiveDate) -> u32 {
    let (next_year, next_month) = if month.month() == 12 {
        (month.year() + 1, 1)
    } else {
        (month.year(), month.month() + 1)
    };
    // Both firsts are valid dates.
    let first = first_of_month(month);
    let next_first = NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap();
    (next_first - first).num_days() as u32
}
