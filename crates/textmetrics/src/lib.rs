//! The `textmetrics` command line.
//!
//! `main.rs` parses [`Cli`], loads configuration and hands off to a function
//! in [`commands`]. The parser lives here so `xtask` can render man pages and
//! completions from [`command()`], and so the commands can be tested as
//! plain functions.

pub mod commands;

#[cfg(feature = "mcp")]
pub mod server;

use camino::Utf8PathBuf;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG                      Log filter for stderr and the log file
    TEXTMETRICS_LOG_PATH          Write the JSONL log to this file
    TEXTMETRICS_LOG_DIR           Write daily JSONL logs to this directory
    TEXTMETRICS_MIN_READABILITY   Readability threshold for `analyze`
    TEXTMETRICS_MIN_SENTIMENT     Sentiment threshold for `analyze`
    TEXTMETRICS_MAX_INPUT_BYTES   Largest accepted input
";

/// Word, sentence, readability and sentiment metrics for plain text.
#[derive(Debug, Parser)]
#[command(name = "textmetrics", version, about, long_about = None)]
#[command(arg_required_else_help = true, after_long_help = ENV_HELP)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print the bare version number and exit
    #[arg(long)]
    pub version_only: bool,

    /// Emit machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Merge this config file over discovered ones
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<Utf8PathBuf>,

    /// Change to DIR before discovering config and reading files
    #[arg(short = 'C', long = "chdir", global = true, value_name = "DIR")]
    pub chdir: Option<Utf8PathBuf>,

    /// Log only errors to stderr
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log more to stderr and the log file (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// When to color text output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print word count, sentence count, readability and sentiment
    Analyze(commands::analyze::AnalyzeArgs),

    /// Print version and the effective configuration
    Info(commands::info::InfoArgs),

    /// Serve the analyzer as an MCP tool over stdio
    #[cfg(feature = "mcp")]
    Serve(commands::serve::ServeArgs),
}

/// `--color` values.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout supports it.
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

impl ColorChoice {
    /// Install this choice as the process-wide owo-colors override.
    pub fn apply(self) {
        match self {
            Self::Auto => owo_colors::unset_override(),
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

/// The clap command tree, for man pages and shell completions.
pub fn command() -> clap::Command {
    Cli::command()
}
