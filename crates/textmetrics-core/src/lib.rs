//! Core library for textmetrics.
//!
//! Computes four descriptive metrics for a block of text: word count,
//! sentence count, a readability score and a sentiment score. The
//! `textmetrics` CLI and MCP server are thin hosts around [`analyze`].
//!
//! # Modules
//!
//! - [`metrics`] - The analyzer and its [`Metrics`] result
//! - [`text`] - Tokenizing and punctuation helpers
//! - [`lexicon`] - Positive and negative word lists
//! - [`input`] - Input size guard for hosts
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use textmetrics_core::analyze;
//!
//! let metrics = analyze("This is great.");
//! assert_eq!(metrics.word_count, 3.0);
//! assert_eq!(metrics.sentiment_score, 1.0);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod input;
pub mod lexicon;
pub mod metrics;
pub mod text;

pub use config::{Config, ConfigLoader, ConfigSource, ConfigSources, LogLevel, Origin};
pub use error::{ConfigError, ConfigResult, InputError, InputResult};
pub use input::DEFAULT_MAX_INPUT_BYTES;
pub use metrics::{Metrics, analyze};
