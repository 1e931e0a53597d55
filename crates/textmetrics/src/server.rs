//! MCP server exposing the analyzer as a tool over stdio.
//!
//! Tools:
//! - `analyze_text`: text in, `{word_count, sentence_count, readability_score, sentiment_score}` out
//! - `get_info`: server name and version
//!
//! Text larger than the configured limit is refused with `invalid_params`
//! before it reaches [`analyze`].

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::{Deserialize, Serialize};

use textmetrics_core::{DEFAULT_MAX_INPUT_BYTES, analyze, input};

/// How `get_info` renders its answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum InfoFormat {
    /// `name vX.Y.Z` plus the description.
    #[default]
    Text,
    /// A JSON object with `name`, `version` and `description`.
    Json,
}

/// `get_info` arguments.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// "text" (default) or "json".
    #[serde(default)]
    pub format: InfoFormat,
}

/// `analyze_text` arguments.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AnalyzeTextParams {
    /// Plain text to measure.
    pub text: String,
}

#[derive(Serialize)]
struct About {
    name: &'static str,
    version: &'static str,
    description: &'static str,
}

const ABOUT: About = About {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
    description: env!("CARGO_PKG_DESCRIPTION"),
};

/// Tool router plus the input limit taken from configuration.
#[derive(Clone)]
pub struct MetricsServer {
    tool_router: ToolRouter<Self>,
    max_input_bytes: Option<usize>,
}

impl Default for MetricsServer {
    fn default() -> Self {
        Self::new(Some(DEFAULT_MAX_INPUT_BYTES))
    }
}

fn json_content(value: &impl Serialize) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("cannot encode result: {e}"), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[tool_router]
impl MetricsServer {
    /// Server refusing text over `max_input_bytes`; `None` accepts any size.
    pub fn new(max_input_bytes: Option<usize>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            max_input_bytes,
        }
    }

    #[tool(description = "Name, version and description of this server")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        match params.format {
            InfoFormat::Json => json_content(&ABOUT),
            InfoFormat::Text => Ok(CallToolResult::success(vec![Content::text(format!(
                "{} v{}\n{}",
                ABOUT.name, ABOUT.version, ABOUT.description
            ))])),
        }
    }

    #[tool(
        description = "Measure plain text. Returns JSON with word_count, sentence_count, readability_score (0-1, 1 means short sentences) and sentiment_score (0-1, 0.5 is neutral)."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn analyze_text(
        &self,
        Parameters(params): Parameters<AnalyzeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        if let Err(err) = input::ensure_within_limit(&params.text, self.max_input_bytes) {
            tracing::warn!(%err, "refusing analyze_text request");
            return Err(McpError::invalid_params(err.to_string(), None));
        }
        let metrics = analyze(&params.text);
        tracing::debug!(?metrics, "analyze_text done");
        json_content(&metrics)
    }
}

#[tool_handler]
impl ServerHandler for MetricsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: ABOUT.name.to_string(),
                version: ABOUT.version.to_string(),
                ..Default::default()
            },
            instructions: Some(
                "Call analyze_text with a block of plain text to get its word count, \
                 sentence count, readability score and sentiment score."
                    .to_string(),
            ),
        }
    }
}
