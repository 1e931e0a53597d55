//! Text processing utilities.
//!
//! Whitespace tokenizing, terminal punctuation counting, and ASCII
//! punctuation stripping for use by [`crate::metrics`].
//!
//! Whitespace here is the C-locale class (space, `\t`, `\n`, `\v`, `\f`,
//! `\r`). Non-ASCII characters, including no-break spaces, never separate
//! tokens.

/// Returns `true` for the C-locale whitespace characters.
///
/// Differs from [`char::is_ascii_whitespace`] by also accepting the vertical
/// tab (U+000B).
pub const fn is_separator(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Split text into tokens: maximal runs of non-whitespace characters.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|t| !t.is_empty())
}

/// Count whitespace-delimited tokens.
pub fn count_words(text: &str) -> usize {
    tokens(text).count()
}

/// Returns `true` for `.`, `!` and `?`.
pub const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Count terminal punctuation marks, one per character.
///
/// Runs are not merged: `"?!"` and `"..."` count 2 and 3.
pub fn count_terminators(text: &str) -> usize {
    text.chars().filter(|&c| is_sentence_terminator(c)).count()
}

/// Remove every ASCII punctuation character from a token.
///
/// Punctuation is removed wherever it appears, so `"don't"` becomes
/// `"dont"` and `"well-known"` becomes `"wellknown"`.
pub fn strip_punctuation(token: &str) -> String {
    token
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect()
}
