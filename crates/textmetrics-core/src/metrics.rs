//! Word, sentence, readability and sentiment metrics.
//!
//! Readability: `clamp((25 - words/sentences) / 20, 0, 1)`. 1.0 at five or
//! fewer words per sentence, 0.0 at twenty-five or more.
//!
//! Sentiment: `positive / (positive + negative)` over the fixed word lists in
//! [`crate::lexicon`], 0.5 when no listed word appears.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::lexicon;
use crate::text;

/// Score used when there is nothing to base a judgement on.
const NEUTRAL: f64 = 0.5;

/// Average sentence length (in words) at or below which readability is 1.0.
const SHORT_SENTENCE: f64 = 5.0;

/// Average sentence length (in words) at or above which readability is 0.0.
const LONG_SENTENCE: f64 = 25.0;

/// Metrics computed for one block of text.
///
/// Serializes to an object with exactly these four numeric keys.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Metrics {
    /// Number of whitespace-delimited tokens.
    pub word_count: f64,
    /// Number of `.`, `!` and `?` characters, floored to 1 when there are words.
    pub sentence_count: f64,
    /// Heuristic in `[0, 1]`; higher means shorter sentences.
    pub readability_score: f64,
    /// Heuristic in `[0, 1]`; 0.5 is neutral.
    pub sentiment_score: f64,
}

impl Metrics {
    /// Result for the empty string.
    ///
    /// Readability is 0 here, not the 0.5 used when non-empty text has no
    /// sentences.
    pub const EMPTY: Self = Self {
        word_count: 0.0,
        sentence_count: 0.0,
        readability_score: 0.0,
        sentiment_score: NEUTRAL,
    };

    /// The metrics as a key/value mapping.
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("word_count", self.word_count),
            ("sentence_count", self.sentence_count),
            ("readability_score", self.readability_score),
            ("sentiment_score", self.sentiment_score),
        ])
    }
}

/// Analyze `text`. Total over all inputs.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze(text: &str) -> Metrics {
    if text.is_empty() {
        return Metrics::EMPTY;
    }

    let words = text::count_words(text);
    let sentences = match text::count_terminators(text) {
        0 if words > 0 => 1,
        n => n,
    };

    let metrics = Metrics {
        word_count: words as f64,
        sentence_count: sentences as f64,
        readability_score: readability_score(words, sentences),
        sentiment_score: sentiment_score(text),
    };
    tracing::debug!(
        words,
        sentences,
        readability = metrics.readability_score,
        sentiment = metrics.sentiment_score,
        "text analyzed"
    );
    metrics
}

fn readability_score(words: usize, sentences: usize) -> f64 {
    if sentences == 0 {
        // Only whitespace-only text gets here.
        return NEUTRAL;
    }
    let avg = words as f64 / sentences as f64;
    ((LONG_SENTENCE - avg) / (LONG_SENTENCE - SHORT_SENTENCE)).clamp(0.0, 1.0)
}

fn sentiment_score(text: &str) -> f64 {
    let lower = text.to_ascii_lowercase();
    let mut positive = 0usize;
    let mut negative = 0usize;

    for token in text::tokens(&lower) {
        let word = text::strip_punctuation(token);
        if lexicon::is_positive(&word) {
            positive += 1;
        }
        if lexicon::is_negative(&word) {
            negative += 1;
        }
    }

    let total = positive + negative;
    if total == 0 {
        NEUTRAL
    } else {
        positive as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_uses_fixed_defaults() {
        let m = analyze("");
        assert_eq!(m, Metrics::EMPTY);
        assert_eq!(m.readability_score, 0.0);
        assert_eq!(m.sentiment_score, 0.5);
    }

    #[test]
    fn short_positive_sentence() {
        let m = analyze("This is great.");
        assert_eq!(m.word_count, 3.0);
        assert_eq!(m.sentence_count, 1.0);
        assert_eq!(m.sentiment_score, 1.0);
        assert_eq!(m.readability_score, 1.0);
    }

    #[test]
    fn unpunctuated_negative_list() {
        let m = analyze("Bad, terrible, awful");
        assert_eq!(m.word_count, 3.0);
        assert_eq!(m.sentence_count, 1.0);
        assert_eq!(m.sentiment_score, 0.0);
    }

    #[test]
    fn no_polarity_words_is_neutral() {
        let m = analyze("Hello world");
        assert_eq!(m.word_count, 2.0);
        assert_eq!(m.sentence_count, 1.0);
        assert_eq!(m.sentiment_score, 0.5);
        assert_eq!(m.readability_score, 1.0);
    }

    #[test]
    fn each_terminator_counts() {
        assert_eq!(analyze("A!B!").sentence_count, 2.0);
        assert_eq!(analyze("Really?!").sentence_count, 2.0);
    }

    #[test]
    fn whitespace_only_takes_no_sentence_branch() {
        let m = analyze("   \n\t");
        assert_eq!(m.word_count, 0.0);
        assert_eq!(m.sentence_count, 0.0);
        assert_eq!(m.readability_score, 0.5);
        assert_eq!(m.sentiment_score, 0.5);
    }

    #[test]
    fn punctuation_only_is_one_word() {
        let m = analyze("...");
        assert_eq!(m.word_count, 1.0);
        assert_eq!(m.sentence_count, 3.0);
        assert_eq!(m.sentiment_score, 0.5);
    }

    #[test]
    fn readability_is_linear_between_bounds() {
        // 15 words, one sentence: (25 - 15) / 20
        let text = "one two three four five six seven eight nine ten eleven twelve thirteen fourteen fifteen.";
        let m = analyze(text);
        assert_eq!(m.word_count, 15.0);
        assert!((m.readability_score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn readability_saturates_at_zero() {
        let text = "word ".repeat(30);
        let m = analyze(&text);
        assert_eq!(m.sentence_count, 1.0);
        assert_eq!(m.readability_score, 0.0);
    }

    #[test]
    fn sentiment_is_case_insensitive() {
        assert_eq!(
            analyze("GOOD").sentiment_score,
            analyze("good").sentiment_score
        );
        assert_eq!(analyze("GoOd").sentiment_score, 1.0);
    }

    #[test]
    fn sentiment_ratio_of_matches() {
        // 3 positive, 1 negative
        let m = analyze("Good, great and amazing. One problem.");
        assert_eq!(m.sentiment_score, 0.75);
    }

    #[test]
    fn inner_punctuation_is_stripped_before_lookup() {
        assert_eq!(analyze("g-o-o-d").sentiment_score, 1.0);
        assert_eq!(analyze("\"wrong\"").sentiment_score, 0.0);
    }

    #[test]
    fn inflected_forms_do_not_match() {
        assert_eq!(analyze("problems loved").sentiment_score, 0.5);
    }

    #[test]
    fn analysis_is_idempotent() {
        let text = "I love this. It is not a problem!";
        assert_eq!(analyze(text), analyze(text));
    }

    #[test]
    fn scores_stay_in_unit_interval() {
        for text in ["", " ", "a", "!!!", "bad good", "x. y. z.", "word word word"] {
            let m = analyze(text);
            assert!((0.0..=1.0).contains(&m.readability_score), "{text:?}");
            assert!((0.0..=1.0).contains(&m.sentiment_score), "{text:?}");
            if m.word_count > 0.0 {
                assert!(m.sentence_count >= 1.0, "{text:?}");
            }
        }
    }

    #[test]
    fn serializes_to_four_keys() {
        let json = serde_json::to_value(analyze("This is great.")).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert_eq!(obj["word_count"], 3.0);
        assert_eq!(obj["sentence_count"], 1.0);
        assert_eq!(obj["readability_score"], 1.0);
        assert_eq!(obj["sentiment_score"], 1.0);
    }

    #[test]
    fn to_map_matches_fields() {
        let m = analyze("Hello world");
        let map = m.to_map();
        assert_eq!(map.len(), 4);
        assert_eq!(map["word_count"], 2.0);
        assert_eq!(map["sentiment_score"], 0.5);
    }
}
