//! Configuration for textmetrics.
//!
//! Layers, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. the user file, `config.<ext>` in the platform config directory
//! 3. project files found by [`discover_project_files`]
//! 4. files passed to [`ConfigLoader::with_file`] (the CLI's `--config`)
//! 5. `TEXTMETRICS_*` environment variables (`TEXTMETRICS_MIN_SENTIMENT=0.5`)
//!
//! `<ext>` is one of `toml`, `yaml`, `yml` or `json`. Files are merged with
//! figment, so a later layer only overrides the keys it sets.
//!
//! ```no_run
//! use camino::Utf8Path;
//! use textmetrics_core::config::ConfigLoader;
//!
//! # fn main() -> textmetrics_core::ConfigResult<()> {
//! let (config, sources) = ConfigLoader::new()
//!     .search_from(Utf8Path::new("docs/drafts"))
//!     .load()?;
//! if let Some(min) = config.min_sentiment {
//!     println!("sentiment gate {min} from {:?}", sources.primary_file());
//! }
//! # Ok(())
//! # }
//! ```

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::input::DEFAULT_MAX_INPUT_BYTES;

const APP_NAME: &str = "textmetrics";
const ENV_PREFIX: &str = "TEXTMETRICS_";
const EXTENSIONS: [&str; 4] = ["toml", "yaml", "yml", "json"];
const DEFAULT_BOUNDARY: &str = ".git";

/// Settings shared by the CLI and the MCP server.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Level for the JSONL log file.
    pub log_level: LogLevel,
    /// Directory for JSONL log files. Unset means the platform data directory.
    pub log_dir: Option<Utf8PathBuf>,
    /// `analyze` fails when the readability score is below this.
    pub min_readability: Option<f64>,
    /// `analyze` fails when the sentiment score is below this.
    pub min_sentiment: Option<f64>,
    /// Largest text accepted, in bytes. Unset means [`DEFAULT_MAX_INPUT_BYTES`].
    pub max_input_bytes: Option<usize>,
    /// Accept text of any size; `max_input_bytes` is ignored.
    pub disable_input_limit: bool,
}

impl Config {
    /// The byte limit hosts enforce before analyzing, or `None` for no limit.
    pub fn input_limit(&self) -> Option<usize> {
        (!self.disable_input_limit)
            .then(|| self.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES))
    }

    /// Reject thresholds outside `[0, 1]`; no score can reach them.
    pub fn validate(&self) -> ConfigResult<()> {
        let thresholds = [
            ("min_readability", self.min_readability),
            ("min_sentiment", self.min_sentiment),
        ];
        for (field, value) in thresholds {
            if let Some(value) = value
                && !(0.0..=1.0).contains(&value)
            {
                return Err(ConfigError::ThresholdOutOfRange { field, value });
            }
        }
        Ok(())
    }
}

/// Level for the file log.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including per-command details.
    Debug,
    /// One line per command (default).
    #[default]
    Info,
    /// Only problems.
    Warn,
    /// Only failures.
    Error,
}

impl LogLevel {
    /// Lowercase name, usable as a `tracing` filter directive.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which layer a config file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// The user file in the platform config directory.
    User,
    /// A file found next to, or above, the search directory.
    Project,
    /// A file named explicitly.
    Explicit,
}

/// A config file that was merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigSource {
    /// Layer the file was loaded as.
    pub origin: Origin,
    /// Path of the file.
    pub path: Utf8PathBuf,
}

/// Files merged into a [`Config`], lowest precedence first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConfigSources(Vec<ConfigSource>);

impl ConfigSources {
    /// The file whose values win, if any file was loaded.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.0.last().map(|source| source.path.as_path())
    }

    /// Loaded files, lowest precedence first.
    pub fn iter(&self) -> impl Iterator<Item = &ConfigSource> {
        self.0.iter()
    }

    /// Number of loaded files.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when only defaults and the environment were used.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, origin: Origin, path: Utf8PathBuf) {
        self.0.push(ConfigSource { origin, path });
    }
}

/// Builder that collects config files and merges them into a [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    search_from: Option<Utf8PathBuf>,
    user_config: bool,
    boundary: Option<String>,
    files: Vec<Utf8PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            search_from: None,
            user_config: true,
            boundary: Some(DEFAULT_BOUNDARY.to_string()),
            files: Vec::new(),
        }
    }
}

impl ConfigLoader {
    /// Loader with the user file enabled, no project search and `.git` as the boundary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look for project files starting in `dir`.
    pub fn search_from(mut self, dir: impl AsRef<Utf8Path>) -> Self {
        self.search_from = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Include or skip the user file.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.user_config = include;
        self
    }

    /// Stop the project search at the directory containing `marker`.
    /// `None` searches up to the filesystem root.
    pub fn boundary(mut self, marker: Option<&str>) -> Self {
        self.boundary = marker.map(str::to_string);
        self
    }

    /// Merge `path` above every discovered file. Later calls win.
    pub fn with_file(mut self, path: impl AsRef<Utf8Path>) -> Self {
        self.files.push(path.as_ref().to_path_buf());
        self
    }

    /// Merge every layer and validate the result.
    #[tracing::instrument(skip(self), fields(search_from = ?self.search_from))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        let mut sources = ConfigSources::default();
        if self.user_config
            && let Some(path) = find_user_file()
        {
            sources.push(Origin::User, path);
        }
        if let Some(dir) = &self.search_from {
            for path in discover_project_files(dir, self.boundary.as_deref()) {
                sources.push(Origin::Project, path);
            }
        }
        for path in self.files {
            sources.push(Origin::Explicit, path);
        }

        let config: Config = sources
            .iter()
            .fold(
                Figment::from(Serialized::defaults(Config::default())),
                |figment, source| merge_file(figment, &source.path),
            )
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(Box::new)?;
        config.validate()?;

        tracing::debug!(
            files = sources.len(),
            log_level = %config.log_level,
            input_limit = ?config.input_limit(),
            "configuration loaded"
        );
        Ok((config, sources))
    }
}

/// Project files in the nearest directory, at or above `start`, that has any.
///
/// Within that directory `.textmetrics.<ext>` files come before
/// `textmetrics.<ext>` files, each in `toml, yaml, yml, json` order, so later
/// entries win the merge. The walk ends after the first directory containing
/// `boundary`.
pub fn discover_project_files(start: &Utf8Path, boundary: Option<&str>) -> Vec<Utf8PathBuf> {
    for dir in start.ancestors() {
        let found: Vec<Utf8PathBuf> = [".", ""]
            .into_iter()
            .flat_map(|dot| {
                EXTENSIONS
                    .iter()
                    .map(move |ext| dir.join(format!("{dot}{APP_NAME}.{ext}")))
            })
            .filter(|path| path.is_file())
            .collect();
        if !found.is_empty() {
            return found;
        }
        if boundary.is_some_and(|marker| dir.join(marker).exists()) {
            break;
        }
    }
    Vec::new()
}

fn find_user_file() -> Option<Utf8PathBuf> {
    let dir = user_config_dir()?;
    EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("config.{ext}")))
        .find(|path| path.is_file())
}

fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
    match path.extension() {
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path)),
        Some("json") => figment.merge(Json::file_exact(path)),
        _ => figment.merge(Toml::file_exact(path)),
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

/// Directory holding the user config file, e.g. `~/.config/textmetrics`.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(project_dirs()?.config_dir().to_path_buf()).ok()
}

/// Machine-local data directory; the default parent of the log directory.
pub fn user_data_local_dir() -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(project_dirs()?.data_local_dir().to_path_buf()).ok()
}
