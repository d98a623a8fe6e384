//! Directional sentiment signals for interpretive conflicts.
//!
//! Two fixed lexicons, matched in a single pass per text with Aho-Corasick.
//! The checks are independent per side: a text can carry both bullish and
//! bearish terms at once, and such a text still opposes a text leaning the
//! other way.

use aho_corasick::{AhoCorasick, AhoCorasickBuilder};

/// Terms signalling an optimistic reading. Stems ("accelerat") cover the
/// inflected forms.
const BULLISH_TERMS: [&str; 8] = [
    "growth",
    "surge",
    "boom",
    "accelerat",
    "outperform",
    "strong",
    "positive",
    "bullish",
];

/// Terms signalling a pessimistic reading.
const BEARISH_TERMS: [&str; 8] = [
    "decline",
    "drop",
    "fall",
    "slow",
    "underperform",
    "weak",
    "negative",
    "bearish",
];

/// Compiled sentiment lexicons.
pub struct SentimentLexicon {
    bullish: AhoCorasick,
    bearish: AhoCorasick,
}

impl SentimentLexicon {
    pub fn new() -> Result<Self, aho_corasick::BuildError> {
        let bullish = AhoCorasickBuilder::new()
            .ascii_case_insensitive(true)
            .build(BULLISH_TERMS)?;
        let bearish = AhoCorasickBuilder::new()
            .ascii_case_insensitive(true)
            .build(BEARISH_TERMS)?;
        Ok(Self { bullish, bearish })
    }

    /// Whether the text contains any bullish term.
    pub fn has_bullish(&self, text: &str) -> bool {
        self.bullish.is_match(text)
    }

    /// Whether the text contains any bearish term.
    pub fn has_bearish(&self, text: &str) -> bool {
        self.bearish.is_match(text)
    }

    /// True when one text carries bullish terms and the other bearish ones.
    /// The two conditions are checked independently: a text that hits both
    /// lexicons counts on both sides.
    pub fn opposed(&self, a: &str, b: &str) -> bool {
        (self.has_bullish(a) && self.has_bearish(b))
            || (self.has_bearish(a) && self.has_bullish(b))
    }
}
