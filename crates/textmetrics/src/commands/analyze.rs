//! Analyze command: word, sentence, readability and sentiment metrics.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use textmetrics_core::{Metrics, analyze};

use super::{InputSource, read_input};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze (`-` or omitted reads stdin).
    #[arg(conflicts_with = "text")]
    pub file: Option<Utf8PathBuf>,

    /// Analyze this text instead of reading a file.
    #[arg(long)]
    pub text: Option<String>,

    /// Fail when the readability score is below this value (0 to 1).
    #[arg(long, value_parser = parse_score)]
    pub min_readability: Option<f64>,

    /// Fail when the sentiment score is below this value (0 to 1).
    #[arg(long, value_parser = parse_score)]
    pub min_sentiment: Option<f64>,
}

/// Minimum scores a text must reach.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Gates {
    /// Minimum readability score.
    pub min_readability: Option<f64>,
    /// Minimum sentiment score.
    pub min_sentiment: Option<f64>,
}

impl Gates {
    /// Describe every gate `metrics` falls below. Empty means pass.
    pub fn failures(&self, metrics: &Metrics) -> Vec<String> {
        let mut failures = Vec::new();
        if let Some(min) = self.min_readability
            && metrics.readability_score < min
        {
            failures.push(format!(
                "readability {:.2} is below {min:.2}",
                metrics.readability_score
            ));
        }
        if let Some(min) = self.min_sentiment
            && metrics.sentiment_score < min
        {
            failures.push(format!(
                "sentiment {:.2} is below {min:.2}",
                metrics.sentiment_score
            ));
        }
        failures
    }

    const fn is_set(&self) -> bool {
        self.min_readability.is_some() || self.min_sentiment.is_some()
    }
}

/// Compute metrics for a file, stdin, or inline text.
///
/// Gates given on the command line win over `config_gates`.
#[instrument(name = "cmd_analyze", skip_all)]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config_gates: Gates,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let gates = Gates {
        min_readability: args.min_readability.or(config_gates.min_readability),
        min_sentiment: args.min_sentiment.or(config_gates.min_sentiment),
    };
    let source = InputSource::from_args(args.file, args.text);
    debug!(%source, ?gates, "executing analyze command");

    let content = read_input(&source, max_input_bytes)?;
    let metrics = analyze(&content);
    let failures = gates.failures(&metrics);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
    } else {
        print_metrics(&metrics);
    }

    if !failures.is_empty() {
        bail!("{source}: {}", failures.join("; "));
    }
    if gates.is_set() && !global_json {
        println!("{} {source} meets all thresholds", "PASS:".green());
    }

    Ok(())
}

fn print_metrics(metrics: &Metrics) {
    println!("{:<12} {}", "Words:".dimmed(), metrics.word_count);
    println!("{:<12} {}", "Sentences:".dimmed(), metrics.sentence_count);
    println!(
        "{:<12} {:.2}",
        "Readability:".dimmed(),
        metrics.readability_score
    );
    let sentiment = metrics.sentiment_score;
    let label = sentiment_label(sentiment);
    let label = if sentiment > 0.5 {
        label.green().to_string()
    } else if sentiment < 0.5 {
        label.red().to_string()
    } else {
        label.to_string()
    };
    println!("{:<12} {sentiment:.2} ({label})", "Sentiment:".dimmed());
}

fn sentiment_label(score: f64) -> &'static str {
    if score > 0.5 {
        "positive"
    } else if score < 0.5 {
        "negative"
    } else {
        "neutral"
    }
}

fn parse_score(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is not between 0 and 1"))
    }
}
