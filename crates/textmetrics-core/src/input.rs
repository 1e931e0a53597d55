//! Input size guard for hosts that accept text from outside.

use crate::error::{InputError, InputResult};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

/// Reject `text` if it is longer than `limit` bytes. `None` accepts anything.
pub const fn ensure_within_limit(text: &str, limit: Option<usize>) -> InputResult<()> {
    check_size(text.len(), limit)
}

/// Size-only form of [`ensure_within_limit`], for callers that know the
/// length before reading the text (e.g. from file metadata).
pub const fn check_size(size: usize, limit: Option<usize>) -> InputResult<()> {
    match limit {
        Some(limit) if size > limit => Err(InputError::TooLarge { size, limit }),
        _ => Ok(()),
    }
}
