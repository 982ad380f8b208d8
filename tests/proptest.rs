//! Property-based tests for chatstats.
//!
//! These tests generate random transcripts and media lists to check the
//! aggregation invariants on inputs no one would write by hand.

use proptest::prelude::*;

use chatstats::media::{MediaAggregator, MediaCandidate, MediaTimestamp};
use chatstats::prelude::*;
use chrono::{TimeZone, Utc};

/// Generate a transcript line using fast strategies (no regex!)
fn arb_line() -> impl Strategy<Value = String> {
    (
        1u32..=28,
        1u32..=12,
        0u32..24,
        0u32..60,
        0u32..60,
        // Fast: select from predefined senders
        prop::sample::select(vec![
            "Alice".to_string(),
            "Bob".to_string(),
            "Charlie".to_string(),
            "Иван".to_string(),
        ]),
        // Fast: select from predefined bodies
        prop::sample::select(vec![
            "Hello".to_string(),
            "How are you?".to_string(),
            "Don't stop".to_string(),
            "🎉🔥 emoji".to_string(),
            "Привет мир".to_string(),
            "time: 10:00".to_string(),
            String::new(),
        ]),
    )
        .prop_map(|(day, month, hour, minute, second, sender, body)| {
            format!(
                "[{day:02}.{month:02}.2024 {hour:02}:{minute:02}:{second:02}] {sender}: {body}"
            )
        })
}

/// Mix valid lines with noise lines.
fn arb_transcript() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => arb_line(),
            1 => prop::sample::select(vec![
                "continuation of the previous message".to_string(),
                "".to_string(),
                "[broken timestamp] X: hi".to_string(),
            ]),
        ],
        1..40,
    )
    .prop_map(|lines| lines.join("\n"))
}

fn arb_candidate() -> impl Strategy<Value = MediaCandidate> {
    (
        prop::sample::select(vec![
            "a - Alice.jpg".to_string(),
            "b - Bob.mp4".to_string(),
            "c - Alice.gif".to_string(),
            "d - Carol.webm".to_string(),
            "IMG_0001.png".to_string(),
            "notes.txt".to_string(),
            "noext".to_string(),
        ]),
        0u64..10_000_000,
        prop_oneof![
            2 => (1u32..=28, 1u32..=12).prop_map(|(d, m)| {
                MediaTimestamp::Dated(Utc.with_ymd_and_hms(2024, m, d, 12, 0, 0).unwrap())
            }),
            1 => Just(MediaTimestamp::Undated),
        ],
    )
        .prop_map(|(name, size, created)| MediaCandidate::new(name, size, created))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // CHAT PROPERTIES
    // ============================================

    /// Counts stay consistent across every axis of bucketing.
    #[test]
    fn chat_counts_consistent(transcript in arb_transcript()) {
        if let Ok(summary) = ChatAggregator::new().aggregate(&transcript) {
            let per_participant: u64 =
                summary.participants.iter().map(|p| p.message_count).sum();
            let per_day: u64 = summary.daily_stats.iter().map(|d| d.message_count).sum();
            let per_hour: u64 = summary.hourly_stats.iter().map(|h| h.message_count).sum();

            prop_assert_eq!(per_participant, summary.total_messages);
            prop_assert_eq!(per_day, summary.total_messages);
            prop_assert_eq!(per_hour, summary.total_messages);
            prop_assert!(summary.total_messages > 0);
        }
    }

    /// The hourly series is always dense: 24 entries, hours 0..=23.
    #[test]
    fn chat_hourly_always_dense(transcript in arb_transcript()) {
        if let Ok(summary) = ChatAggregator::new().aggregate(&transcript) {
            prop_assert_eq!(summary.hourly_stats.len(), 24);
            for (i, stat) in summary.hourly_stats.iter().enumerate() {
                prop_assert_eq!(stat.hour as usize, i);
            }
        }
    }

    /// Top-N lists are bounded, non-increasing, with percentages in [0, 100].
    #[test]
    fn chat_top_lists_well_formed(transcript in arb_transcript()) {
        if let Ok(summary) = ChatAggregator::new().aggregate(&transcript) {
            prop_assert!(summary.emoji_stats.top_emojis.len() <= 10);
            prop_assert!(summary.word_stats.top_words.len() <= 20);

            for pair in summary.word_stats.top_words.windows(2) {
                prop_assert!(pair[0].count >= pair[1].count);
            }
            for word in &summary.word_stats.top_words {
                prop_assert!(word.percentage >= 0.0 && word.percentage <= 100.0);
            }
            for emoji in &summary.emoji_stats.top_emojis {
                prop_assert!(emoji.percentage >= 0.0 && emoji.percentage <= 100.0);
            }
        }
    }

    /// Daily series is sorted strictly ascending.
    #[test]
    fn chat_daily_sorted(transcript in arb_transcript()) {
        if let Ok(summary) = ChatAggregator::new().aggregate(&transcript) {
            for pair in summary.daily_stats.windows(2) {
                prop_assert!(pair[0].date < pair[1].date);
            }
        }
    }

    /// Aggregation is deterministic, down to the serialized bytes.
    #[test]
    fn chat_deterministic(transcript in arb_transcript()) {
        let first = ChatAggregator::new().aggregate(&transcript);
        let second = ChatAggregator::new().aggregate(&transcript);
        match (first, second) {
            (Ok(a), Ok(b)) => {
                prop_assert_eq!(
                    serde_json::to_string(&a).unwrap(),
                    serde_json::to_string(&b).unwrap()
                );
            }
            (Err(_), Err(_)) => {}
            _ => prop_assert!(false, "aggregation nondeterministic between runs"),
        }
    }

    // ============================================
    // MEDIA PROPERTIES
    // ============================================

    /// Kind totals equal the sum over participants, and histogram covers all.
    #[test]
    fn media_counts_consistent(candidates in prop::collection::vec(arb_candidate(), 1..40)) {
        let total_candidates = candidates.len() as u64;
        if let Ok(summary) = MediaAggregator::new().aggregate(candidates) {
            prop_assert_eq!(summary.total_files, total_candidates);

            let histogram_total: u64 = summary.file_type_counts.values().sum();
            prop_assert_eq!(histogram_total, total_candidates);

            let per_participant_images: u64 =
                summary.by_participant.values().map(|p| p.image_count).sum();
            let per_participant_gifs: u64 =
                summary.by_participant.values().map(|p| p.gif_count).sum();
            let per_participant_videos: u64 =
                summary.by_participant.values().map(|p| p.video_count).sum();

            prop_assert_eq!(per_participant_images, summary.image_count);
            prop_assert_eq!(per_participant_gifs, summary.gif_count);
            prop_assert_eq!(per_participant_videos, summary.video_count);
        }
    }

    /// The largest-files list is bounded and sorted by descending size.
    #[test]
    fn media_largest_well_formed(candidates in prop::collection::vec(arb_candidate(), 1..40)) {
        if let Ok(summary) = MediaAggregator::new().aggregate(candidates) {
            prop_assert!(summary.largest_files.len() <= 10);
            for pair in summary.largest_files.windows(2) {
                prop_assert!(pair[0].size_bytes >= pair[1].size_bytes);
            }
        }
    }

    /// Day and month series are sorted ascending; per-day kind counts sum to
    /// the per-month counts for the covering month.
    #[test]
    fn media_series_sorted(candidates in prop::collection::vec(arb_candidate(), 1..40)) {
        if let Ok(summary) = MediaAggregator::new().aggregate(candidates) {
            for pair in summary.daily_stats.windows(2) {
                prop_assert!(pair[0].date < pair[1].date);
            }
            for pair in summary.monthly_stats.windows(2) {
                prop_assert!(pair[0].month < pair[1].month);
            }

            let daily_items: u64 = summary
                .daily_stats
                .iter()
                .map(|d| d.image_count + d.gif_count + d.video_count)
                .sum();
            let monthly_items: u64 = summary
                .monthly_stats
                .iter()
                .map(|m| m.image_count + m.gif_count + m.video_count)
                .sum();
            prop_assert_eq!(daily_items, monthly_items);
        }
    }

    /// Aggregation is deterministic, down to the serialized bytes.
    #[test]
    fn media_deterministic(candidates in prop::collection::vec(arb_candidate(), 0..40)) {
        let first = MediaAggregator::new().aggregate(candidates.clone());
        let second = MediaAggregator::new().aggregate(candidates);
        match (first, second) {
            (Ok(a), Ok(b)) => {
                prop_assert_eq!(
                    serde_json::to_string(&a).unwrap(),
                    serde_json::to_string(&b).unwrap()
                );
            }
            (Err(_), Err(_)) => {}
            _ => prop_assert!(false, "aggregation nondeterministic between runs"),
        }
    }
}
