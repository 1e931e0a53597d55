//! Polarity word lists for sentiment scoring.
//!
//! Entries are lower-case ASCII with no punctuation, matching tokens after
//! [`crate::text::strip_punctuation`] and ASCII lower-casing.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Words that count toward a positive sentiment.
pub static POSITIVE_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "good",
        "great",
        "excellent",
        "amazing",
        "love",
        "happy",
        "success",
        "beautiful",
        "perfect",
    ]
    .into_iter()
    .collect()
});

/// Words that count toward a negative sentiment.
pub static NEGATIVE_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "bad", "terrible", "awful", "hate", "sad", "negative", "failure", "wrong", "problem",
    ]
    .into_iter()
    .collect()
});

/// Whether `word` is in the positive list.
pub fn is_positive(word: &str) -> bool {
    POSITIVE_WORDS.contains(word)
}

/// Whether `word` is in the negative list.
pub fn is_negative(word: &str) -> bool {
    NEGATIVE_WORDS.contains(word)
}
