//! textmetrics CLI
#![deny(unsafe_code)]

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use textmetrics::commands::analyze::Gates;
use textmetrics::{Cli, Commands, commands};
use textmetrics_core::{Config, ConfigLoader, ConfigSources};

mod observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let Some(command) = cli.command else {
        return Ok(());
    };

    if let Some(dir) = &cli.chdir {
        std::env::set_current_dir(dir).with_context(|| format!("cannot enter {dir}"))?;
    }
    let (config, sources) = load_config(cli.config.as_ref())?;

    let _logs = observability::init_observability(
        &observability::ObservabilityConfig::from_env_with_overrides(
            config.log_dir.clone().map(Utf8PathBuf::into_std_path_buf),
        ),
        observability::LogFilters::new(cli.quiet, cli.verbose, config.log_level.as_str()),
    )
    .context("failed to initialize logging")?;
    tracing::debug!(config_files = sources.len(), json = cli.json, "starting");

    let result = run(command, cli.json, &config, &sources);
    if let Err(err) = &result {
        tracing::error!(error = %format!("{err:#}"), "command failed");
    }
    result
}

fn load_config(explicit: Option<&Utf8PathBuf>) -> anyhow::Result<(Config, ConfigSources)> {
    let cwd = std::env::current_dir().context("cannot determine the working directory")?;
    let cwd = Utf8PathBuf::from_path_buf(cwd)
        .map_err(|dir| anyhow::anyhow!("working directory {} is not UTF-8", dir.display()))?;

    let loader = explicit
        .into_iter()
        .fold(ConfigLoader::new().search_from(&cwd), |loader, file| {
            loader.with_file(file)
        });
    loader.load().context("failed to load configuration")
}

fn run(
    command: Commands,
    json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    let max_input = config.input_limit();
    match command {
        Commands::Analyze(args) => {
            let gates = Gates {
                min_readability: config.min_readability,
                min_sentiment: config.min_sentiment,
            };
            commands::analyze::cmd_analyze(args, json, gates, max_input)
        }
        Commands::Info(args) => commands::info::cmd_info(args, json, config, sources),
        #[cfg(feature = "mcp")]
        Commands::Serve(args) => tokio::runtime::Runtime::new()
            .context("failed to start the async runtime")?
            .block_on(commands::serve::cmd_serve(args, max_input)),
    }
}
