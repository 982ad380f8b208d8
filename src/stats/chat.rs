//! Single-pass chat aggregation.
//!
//! The [`ChatAggregator`] streams over transcript lines once. Every
//! accumulator is a monotonic counter or a running min/max, so one
//! pass-through suffices. Accumulators are local to the call — no shared
//! state, so concurrent aggregations of different transcripts are safe.
//!
//! # Example
//!
//! ```
//! use chatstats::ChatAggregator;
//!
//! let transcript = "\
//! [01.01.2024 10:00:00] Alice: hello 😀
//! [01.01.2024 10:05:00] Bob: hi";
//!
//! let summary = ChatAggregator::new().aggregate(transcript)?;
//! assert_eq!(summary.total_messages, 2);
//! assert_eq!(summary.participants.len(), 2);
//! # Ok::<(), chatstats::ChatStatsError>(())
//! ```

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Timelike, Utc};

use crate::error::{ChatStatsError, Result};
use crate::grammar::LineGrammar;
use crate::record::MessageRecord;
use crate::tokenize::Tokenizer;

use super::models::{
    ChatSummary, DailyStat, EmojiStat, EmojiStats, HourlyStat, ParticipantStat, TimeRange,
    WordStat, WordStats,
};
use super::ranking::{self, RankedEntry};

/// Emoji top-lists keep the 10 most frequent tokens.
const TOP_EMOJI: usize = 10;

/// Word top-lists keep the 20 most frequent tokens.
const TOP_WORDS: usize = 20;

/// Builds a [`ChatSummary`] from raw transcript text in a single pass.
///
/// Rejected lines (continuations of multi-line messages, system lines,
/// anything not matching the grammar) are skipped silently. The aggregation
/// fails only when *nothing* usable is found.
#[derive(Debug, Clone, Default)]
pub struct ChatAggregator {
    grammar: LineGrammar,
    tokenizer: Tokenizer,
}

/// Running counters for one sender.
#[derive(Debug, Default)]
struct SenderAccumulator {
    message_count: u64,
    body_chars: u64,
    emoji: HashMap<String, u64>,
    words: HashMap<String, u64>,
}

/// All accumulators for one pass, owned by a single `aggregate` call.
#[derive(Debug, Default)]
struct ChatAccumulator {
    /// Sender names in order of first appearance; drives the tie-break when
    /// participants have equal message counts.
    first_seen: Vec<String>,
    senders: HashMap<String, SenderAccumulator>,
    daily: HashMap<NaiveDate, u64>,
    hourly: [u64; 24],
    global_emoji: HashMap<String, u64>,
    global_words: HashMap<String, u64>,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    total_messages: u64,
}

impl ChatAccumulator {
    fn observe(&mut self, record: &MessageRecord, tokenizer: &Tokenizer) {
        self.total_messages += 1;

        // Running min/max over accepted timestamps.
        let ts = record.timestamp();
        self.start = Some(self.start.map_or(ts, |s| s.min(ts)));
        self.end = Some(self.end.map_or(ts, |e| e.max(ts)));

        *self.daily.entry(ts.date_naive()).or_insert(0) += 1;
        self.hourly[ts.hour() as usize] += 1;

        if !self.senders.contains_key(record.sender()) {
            self.first_seen.push(record.sender().to_owned());
        }
        let sender = self.senders.entry(record.sender().to_owned()).or_default();
        sender.message_count += 1;
        sender.body_chars += record.body_chars() as u64;

        for emoji in tokenizer.emoji_tokens(record.body()) {
            *self.global_emoji.entry(emoji.clone()).or_insert(0) += 1;
            *sender.emoji.entry(emoji).or_insert(0) += 1;
        }

        for word in tokenizer.word_tokens(record.body()) {
            *self.global_words.entry(word.clone()).or_insert(0) += 1;
            *sender.words.entry(word).or_insert(0) += 1;
        }
    }
}

impl ChatAggregator {
    /// Creates a new aggregator.
    pub fn new() -> Self {
        Self {
            grammar: LineGrammar::new(),
            tokenizer: Tokenizer::new(),
        }
    }

    /// Aggregates a full transcript.
    ///
    /// # Errors
    ///
    /// - [`ChatStatsError::UnsupportedInput`] when the transcript is empty or
    ///   whitespace-only.
    /// - [`ChatStatsError::Parse`] when no line matches the message grammar.
    pub fn aggregate(&self, content: &str) -> Result<ChatSummary> {
        if content.trim().is_empty() {
            return Err(ChatStatsError::unsupported_input(
                "empty transcript".to_string(),
            ));
        }
        self.aggregate_lines(content.lines())
    }

    /// Aggregates an already-split line sequence.
    ///
    /// Same failure semantics as [`aggregate`](Self::aggregate), except the
    /// empty-input check: an empty iterator yields
    /// [`ChatStatsError::Parse`], since zero lines produce zero records.
    pub fn aggregate_lines<'a, I>(&self, lines: I) -> Result<ChatSummary>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut acc = ChatAccumulator::default();

        for line in lines {
            if let Some(record) = self.grammar.parse_line(line) {
                acc.observe(&record, &self.tokenizer);
            }
        }

        if acc.total_messages == 0 {
            return Err(ChatStatsError::parse());
        }

        Ok(finalize(acc))
    }
}

/// Turns the accumulators into the immutable summary.
fn finalize(acc: ChatAccumulator) -> ChatSummary {
    // total_messages > 0 here, so start/end are set.
    let time_range = TimeRange {
        start: acc.start.unwrap_or_default(),
        end: acc.end.unwrap_or_default(),
    };

    let mut participants: Vec<ParticipantStat> = acc
        .first_seen
        .iter()
        .map(|name| {
            let sender = &acc.senders[name];
            ParticipantStat {
                name: name.clone(),
                message_count: sender.message_count,
                word_count: sender.words.values().sum(),
                emoji_count: sender.emoji.values().sum(),
                average_message_length: average(sender.body_chars, sender.message_count),
                top_emojis: emoji_list(ranking::top_n(&sender.emoji, TOP_EMOJI)),
                top_words: word_list(ranking::top_n(&sender.words, TOP_WORDS)),
            }
        })
        .collect();

    // Stable sort: equal counts keep first-seen order.
    participants.sort_by(|a, b| b.message_count.cmp(&a.message_count));

    let mut daily_stats: Vec<DailyStat> = acc
        .daily
        .iter()
        .map(|(&date, &message_count)| DailyStat {
            date,
            message_count,
        })
        .collect();
    daily_stats.sort_by_key(|d| d.date);

    let hourly_stats: Vec<HourlyStat> = (0..24)
        .map(|hour| HourlyStat {
            hour,
            message_count: acc.hourly[hour as usize],
        })
        .collect();

    let emoji_by_participant = acc
        .first_seen
        .iter()
        .filter(|name| !acc.senders[*name].emoji.is_empty())
        .map(|name| {
            (
                name.clone(),
                emoji_list(ranking::top_n(&acc.senders[name].emoji, TOP_EMOJI)),
            )
        })
        .collect();

    let words_by_participant = acc
        .first_seen
        .iter()
        .filter(|name| !acc.senders[*name].words.is_empty())
        .map(|name| {
            (
                name.clone(),
                word_list(ranking::top_n(&acc.senders[name].words, TOP_WORDS)),
            )
        })
        .collect();

    let total_words: u64 = acc.global_words.values().sum();

    ChatSummary {
        chat_name: None,
        total_messages: acc.total_messages,
        total_words,
        time_range,
        participants,
        daily_stats,
        hourly_stats,
        emoji_stats: EmojiStats {
            total_count: acc.global_emoji.values().sum(),
            top_emojis: emoji_list(ranking::top_n(&acc.global_emoji, TOP_EMOJI)),
            by_participant: emoji_by_participant,
        },
        word_stats: WordStats {
            total_count: total_words,
            unique_count: acc.global_words.len() as u64,
            top_words: word_list(ranking::top_n(&acc.global_words, TOP_WORDS)),
            by_participant: words_by_participant,
        },
    }
}

fn average(total: u64, count: u64) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

fn emoji_list(ranked: Vec<RankedEntry>) -> Vec<EmojiStat> {
    ranked
        .into_iter()
        .map(|entry| EmojiStat {
            emoji: entry.token,
            count: entry.count,
            percentage: entry.percentage,
        })
        .collect()
}

fn word_list(ranked: Vec<RankedEntry>) -> Vec<WordStat> {
    ranked
        .into_iter()
        .map(|entry| WordStat {
            word: entry.token,
            count: entry.count,
            percentage: entry.percentage,
        })
        .collect()
}
