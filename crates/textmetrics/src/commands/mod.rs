//! Command implementations.

use std::fmt;
use std::io::Read;

use anyhow::Context;
use camino::Utf8PathBuf;
use textmetrics_core::input;

pub mod analyze;
pub mod info;
#[cfg(feature = "mcp")]
pub mod serve;

/// Where a command reads its text from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A file on disk.
    File(Utf8PathBuf),
    /// Standard input.
    Stdin,
    /// Text given on the command line.
    Inline(String),
}

impl InputSource {
    /// Pick the source from an optional path and optional inline text.
    ///
    /// A path of `-`, or no path and no text, means stdin.
    pub fn from_args(file: Option<Utf8PathBuf>, text: Option<String>) -> Self {
        match (file, text) {
            (_, Some(text)) => Self::Inline(text),
            (Some(path), None) if path.as_str() != "-" => Self::File(path),
            _ => Self::Stdin,
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{path}"),
            Self::Stdin => f.write_str("<stdin>"),
            Self::Inline(_) => f.write_str("<text>"),
        }
    }
}

/// Read the text for `source`, rejecting it once it passes `max_bytes`.
///
/// The size check runs on raw bytes before decoding. Invalid UTF-8 is
/// replaced with U+FFFD, which never counts as whitespace or punctuation.
pub fn read_input(source: &InputSource, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let bytes = match source {
        InputSource::Inline(text) => {
            input::ensure_within_limit(text, max_bytes)
                .with_context(|| format!("cannot analyze {source}"))?;
            return Ok(text.clone());
        }
        InputSource::File(path) => {
            let size = std::fs::metadata(path)
                .with_context(|| format!("failed to read {path}"))?
                .len();
            input::check_size(usize::try_from(size).unwrap_or(usize::MAX), max_bytes)
                .with_context(|| format!("cannot analyze {source}"))?;
            std::fs::read(path).with_context(|| format!("failed to read {path}"))?
        }
        InputSource::Stdin => {
            let mut buf = Vec::new();
            // limit + 1 bytes are enough to tell that stdin is over the limit
            let cap = max_bytes.map_or(u64::MAX, |max| (max as u64).saturating_add(1));
            std::io::stdin()
                .lock()
                .take(cap)
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    input::check_size(bytes.len(), max_bytes).with_context(|| format!("cannot analyze {source}"))?;
    Ok(decode(bytes))
}

fn decode(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}
