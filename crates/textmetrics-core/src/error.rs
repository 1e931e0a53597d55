//! Error types for textmetrics-core.

use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A file or environment variable did not parse into [`crate::Config`].
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// A score threshold lies outside `[0, 1]`.
    #[error("invalid configuration: {field} = {value} is not between 0 and 1")]
    ThresholdOutOfRange {
        /// Name of the offending key.
        field: &'static str,
        /// Value that was loaded.
        value: f64,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised when validating text handed in by a host.
///
/// [`crate::metrics::analyze`] itself accepts any string.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    /// The text is larger than the configured limit.
    #[error("input too large: {size} bytes (limit: {limit} bytes)")]
    TooLarge {
        /// Size of the rejected text in bytes.
        size: usize,
        /// Limit that was exceeded.
        limit: usize,
    },
}

/// Result type alias using [`InputError`].
pub type InputResult<T> = Result<T, InputError>;
