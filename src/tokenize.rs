//! Emoji and word scans over message bodies.
//!
//! Two independent scans:
//!
//! - **Emoji scan** — maximal runs of emoji-presentation/emoji-modifier
//!   codepoints. Joiners (ZWJ) and the emoji variation selector are kept
//!   inside runs so a multi-codepoint sequence like 👨‍👩‍👧 or 👍🏽 counts as a
//!   single token.
//! - **Word scan** — maximal runs of letter/number/apostrophe codepoints,
//!   lower-cased before counting, so contractions like `don't` stay single
//!   tokens.
//!
//! Both return ordered token sequences with repeats; frequency counting
//! happens downstream in the aggregator.
//!
//! # Example
//!
//! ```
//! use chatstats::Tokenizer;
//!
//! let tokenizer = Tokenizer::new();
//!
//! assert_eq!(tokenizer.emoji_tokens("hello 😀😀"), vec!["😀😀"]);
//! assert_eq!(
//!     tokenizer.word_tokens("Don't panic!"),
//!     vec!["don't", "panic"]
//! );
//! ```

use regex::Regex;

/// Maximal runs of emoji codepoints.
///
/// ZWJ (U+200D) and VS-16 (U+FE0F) are included so sequences stay in one
/// run. `Emoji_Component` is deliberately absent: it covers ASCII digits and
/// `#`/`*`, which must not be classified as emoji in ordinary text.
const EMOJI_PATTERN: &str =
    r"[\p{Emoji_Presentation}\p{Emoji_Modifier_Base}\p{Emoji_Modifier}\x{200D}\x{FE0F}]+";

/// Maximal runs of letter/number/apostrophe codepoints.
const WORD_PATTERN: &str = r"[\p{L}\p{N}']+";

/// Extracts emoji and word tokens from message text.
///
/// Compiles both scan regexes once at construction.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    emoji: Regex,
    word: Regex,
}

impl Tokenizer {
    /// Creates a new tokenizer.
    pub fn new() -> Self {
        Self {
            // Both patterns are verified constants.
            emoji: Regex::new(EMOJI_PATTERN).unwrap(),
            word: Regex::new(WORD_PATTERN).unwrap(),
        }
    }

    /// Returns all emoji tokens in order of appearance.
    ///
    /// Each maximal run is one token; repeats are preserved. Runs consisting
    /// only of joiners/selectors (a stray ZWJ between words) are discarded.
    pub fn emoji_tokens(&self, text: &str) -> Vec<String> {
        self.emoji
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|run| {
                run.chars()
                    .any(|c| c != '\u{200D}' && c != '\u{FE0F}')
            })
            .map(str::to_owned)
            .collect()
    }

    /// Returns all word tokens in order of appearance, lower-cased.
    ///
    /// Apostrophes are word-internal, so `don't` is one token. Digit runs
    /// count as words, matching the letter/number scan.
    pub fn word_tokens(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.word
            .find_iter(&lowered)
            .map(|m| m.as_str().to_owned())
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
