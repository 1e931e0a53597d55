//! Logging setup.
//!
//! Two sinks:
//! - stderr, human readable, warnings and up unless `-v`/`-q`/`RUST_LOG` say otherwise
//! - a JSONL file, at the configured log level, rotated daily
//!
//! Nothing is ever written to stdout; the MCP transport and `--json` output own it.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, registry};

/// Environment variable naming an explicit log file.
pub const LOG_PATH_ENV: &str = "TEXTMETRICS_LOG_PATH";

/// Environment variable naming the log directory.
pub const LOG_DIR_ENV: &str = "TEXTMETRICS_LOG_DIR";

const LOG_FILE_PREFIX: &str = "textmetrics";
const LOG_FILE_SUFFIX: &str = "jsonl";

/// Where the JSONL log goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// A single, never-rotated file.
    File(PathBuf),
    /// Daily-rotated `textmetrics.<date>.jsonl` files in this directory.
    Dir(PathBuf),
    /// No file logging.
    Disabled,
}

/// Resolved logging destinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Destination of the JSONL log.
    pub target: LogTarget,
}

impl ObservabilityConfig {
    /// Resolve the log target from the environment, then the config file's
    /// `log_dir`, then the platform data directory.
    ///
    /// Precedence: `TEXTMETRICS_LOG_PATH` > `TEXTMETRICS_LOG_DIR` > `config_log_dir` > default.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
            config_log_dir,
            textmetrics_core::config::user_data_local_dir()
                .map(|dir| dir.into_std_path_buf().join("logs")),
        )
    }

    fn resolve(
        env_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
        default_dir: Option<PathBuf>,
    ) -> Self {
        let target = match (env_path, env_dir.or(config_dir).or(default_dir)) {
            (Some(path), _) => LogTarget::File(path),
            (None, Some(dir)) => LogTarget::Dir(dir),
            (None, None) => LogTarget::Disabled,
        };
        Self { target }
    }
}

/// Level filters for the two sinks.
#[derive(Debug)]
pub struct LogFilters {
    /// Filter for the stderr sink.
    pub stderr: EnvFilter,
    /// Filter for the JSONL sink.
    pub file: EnvFilter,
}

impl LogFilters {
    /// Build filters from CLI flags and the configured level.
    ///
    /// `RUST_LOG`, when set, replaces both.
    pub fn new(quiet: bool, verbose: u8, config_level: &str) -> Self {
        let from_env = || EnvFilter::try_from_default_env().ok();
        Self {
            stderr: from_env()
                .unwrap_or_else(|| EnvFilter::new(stderr_directive(quiet, verbose))),
            file: from_env()
                .unwrap_or_else(|| EnvFilter::new(file_directive(verbose, config_level))),
        }
    }
}

fn stderr_directive(quiet: bool, verbose: u8) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

fn file_directive(verbose: u8, config_level: &str) -> &str {
    match verbose {
        0 => config_level,
        1 => "debug",
        _ => "trace",
    }
}

/// Flushes buffered log lines when dropped. Hold it until `main` returns.
#[derive(Debug)]
pub struct ObservabilityGuard {
    _file: Option<WorkerGuard>,
}

/// Install the global subscriber.
///
/// A log directory that can't be created disables file logging with a
/// warning rather than failing the command.
pub fn init_observability(
    config: &ObservabilityConfig,
    filters: LogFilters,
) -> anyhow::Result<ObservabilityGuard> {
    let (appender, setup_error) = match build_appender(&config.target) {
        Ok(appender) => (appender, None),
        Err(err) => (None, Some(err)),
    };
    let (writer, guard) = match appender {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filters.stderr);
    let file_layer = writer.map(|writer| {
        fmt::layer()
            .json()
            .with_writer(writer)
            .with_ansi(false)
            .with_filter(filters.file)
    });

    registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    if let Some(err) = setup_error {
        tracing::warn!(error = %format!("{err:#}"), "file logging disabled");
    }

    Ok(ObservabilityGuard { _file: guard })
}

fn build_appender(target: &LogTarget) -> anyhow::Result<Option<RollingFileAppender>> {
    let appender = match target {
        LogTarget::Disabled => return Ok(None),
        LogTarget::File(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("log path {} has no file name", path.display()))?;
            RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(name.to_string_lossy().into_owned())
                .build(dir)
                .with_context(|| format!("failed to open log file {}", path.display()))?
        }
        LogTarget::Dir(dir) => RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(LOG_FILE_PREFIX)
            .filename_suffix(LOG_FILE_SUFFIX)
            .build(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?,
    };
    Ok(Some(appender))
}
