//! Info command: version and effective configuration.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use textmetrics_core::{Config, ConfigSources, Origin};
use tracing::instrument;

/// Arguments for the `info` subcommand. Output format follows `--json`.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {}

#[derive(Debug, Serialize)]
struct Report<'a> {
    name: &'static str,
    version: &'static str,
    description: &'static str,
    repository: &'static str,
    config: Effective<'a>,
}

/// Settings as the commands see them, after every layer is merged.
#[derive(Debug, Serialize)]
struct Effective<'a> {
    config_file: Option<&'a str>,
    sources: &'a ConfigSources,
    log_level: &'static str,
    log_dir: Option<&'a str>,
    min_readability: Option<f64>,
    min_sentiment: Option<f64>,
    /// `null` when the limit is disabled.
    max_input_bytes: Option<usize>,
}

impl<'a> Report<'a> {
    fn new(config: &'a Config, sources: &'a ConfigSources) -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            config: Effective {
                config_file: sources.primary_file().map(|path| path.as_str()),
                sources,
                log_level: config.log_level.as_str(),
                log_dir: config.log_dir.as_ref().map(|dir| dir.as_str()),
                min_readability: config.min_readability,
                min_sentiment: config.min_sentiment,
                max_input_bytes: config.input_limit(),
            },
        }
    }
}

/// Print the package version and the merged configuration.
#[instrument(name = "cmd_info", skip_all, fields(json = json))]
pub fn cmd_info(
    _args: InfoArgs,
    json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    let report = Report::new(config, sources);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} {}", report.name.bold(), report.version.green());
    println!("{}", report.description);
    println!("{}", report.repository.cyan());

    println!();
    println!("{}", "Config files".bold().underline());
    if sources.is_empty() {
        println!("  {}", "none, using defaults".yellow());
    }
    for source in sources.iter() {
        println!("  {:<9} {}", origin_label(source.origin).dimmed(), source.path);
    }

    let cfg = &report.config;
    println!();
    println!("{}", "Settings".bold().underline());
    println!("  {:<16} {}", "log level".dimmed(), cfg.log_level);
    println!(
        "  {:<16} {}",
        "log dir".dimmed(),
        cfg.log_dir.unwrap_or("(platform default)")
    );
    println!("  {:<16} {}", "min readability".dimmed(), threshold(cfg.min_readability));
    println!("  {:<16} {}", "min sentiment".dimmed(), threshold(cfg.min_sentiment));
    match cfg.max_input_bytes {
        Some(bytes) => println!("  {:<16} {bytes} bytes", "input limit".dimmed()),
        None => println!("  {:<16} {}", "input limit".dimmed(), "disabled".yellow()),
    }
    Ok(())
}

const fn origin_label(origin: Origin) -> &'static str {
    match origin {
        Origin::User => "user",
        Origin::Project => "project",
        Origin::Explicit => "--config",
    }
}

fn threshold(value: Option<f64>) -> String {
    value.map_or_else(|| "none".to_string(), |v| format!("{v:.2}"))
}
