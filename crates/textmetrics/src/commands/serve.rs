//! Serve command: run the MCP server on stdio.

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use tracing::{info, instrument};

use crate::server::MetricsServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    // Transport is always stdio; nothing to configure yet.
}

/// Serve MCP requests on stdin/stdout until the client disconnects.
///
/// Logs must not go to stdout while serving; the subscriber in `main` writes
/// to stderr and the log file only.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(_args: ServeArgs, max_input_bytes: Option<usize>) -> anyhow::Result<()> {
    info!(?max_input_bytes, "starting MCP server on stdio");

    let service = MetricsServer::new(max_input_bytes)
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server")?;
    let reason = service
        .waiting()
        .await
        .context("MCP server stopped unexpectedly")?;

    info!(?reason, "MCP server stopped");
    Ok(())
}
