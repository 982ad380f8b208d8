//! Sorted, percentage-annotated top-N lists.
//!
//! Shared by the chat aggregator (emoji and word tables) and reused in
//! spirit by the media aggregator (largest-files list uses the same
//! truncation policy with size as the count).
//!
//! The source data lives in hash maps whose iteration order is not stable,
//! so ties are broken by an explicit secondary key: ascending token order.
//! This makes every finalized list deterministic for identical input.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One ranked token: count plus its share of the scope total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// The token (emoji, word, ...).
    pub token: String,
    /// Occurrences within the scope.
    pub count: u64,
    /// `count / total * 100`; `0.0` when the scope total is `0`.
    pub percentage: f64,
}

/// Reduces a frequency map to its top `n` entries.
///
/// Sorted by descending count, ties broken by ascending token; truncated to
/// `n`. The percentage denominator is the sum over the *whole* map, not the
/// truncated slice, so percentages across a top-N list sum to at most 100.
///
/// An empty map yields an empty list — never a division by zero.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use chatstats::stats::ranking::top_n;
///
/// let counts = HashMap::from([
///     ("hello".to_string(), 3u64),
///     ("hi".to_string(), 1),
/// ]);
/// let ranked = top_n(&counts, 10);
///
/// assert_eq!(ranked[0].token, "hello");
/// assert!((ranked[0].percentage - 75.0).abs() < f64::EPSILON);
/// ```
pub fn top_n(counts: &HashMap<String, u64>, n: usize) -> Vec<RankedEntry> {
    let total: u64 = counts.values().sum();

    let mut entries: Vec<(&String, u64)> = counts.iter().map(|(k, &v)| (k, v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    entries
        .into_iter()
        .take(n)
        .map(|(token, count)| RankedEntry {
            token: token.clone(),
            count,
            percentage: percentage_of(count, total),
        })
        .collect()
}

/// `count / total * 100`, guarded against a zero denominator.
pub(crate) fn percentage_of(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
