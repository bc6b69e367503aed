//! Search tool definition.
//!
//! Answers a query with Google Search grounding. When the grounded call
//! fails for any reason, the query is retried once against the model's
//! training data and the answer is marked as not coming from the live web.
//!
//! If both calls fail the reported cause is the grounded call's; the
//! fallback's own error is only logged.

use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use super::common::{into_call_result, parse_params, tool_route};
use crate::domains::generation::{GenerateOptions, Turn};
use crate::domains::tools::{GenerationError, ToolContext};

/// Marker prepended to answers produced without web grounding.
pub const FALLBACK_NOTICE: &str = "⚠️ Web search unavailable, using knowledge base:\n\n";

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// The search query.
    #[schemars(description = "The search query")]
    pub query: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Search tool - web-grounded answer with knowledge-base fallback.
pub struct SearchTool;

impl SearchTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Search for current information using Gemini with real-time web search capabilities";

    /// Prefix attached to every failure of this tool.
    pub const FAILURE_PREFIX: &'static str = "Search failed";

    /// Prompt for the grounded attempt.
    pub fn grounded_prompt(query: &str) -> String {
        format!("Search the web for current information about: {}", query)
    }

    /// Prompt for the knowledge-only fallback.
    pub fn fallback_prompt(query: &str) -> String {
        format!(
            "Based on your knowledge, provide information about: {}\n\n\
             Note: This is based on training data, not real-time web search.",
            query
        )
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(query = %params.query))]
    pub async fn execute(ctx: &ToolContext, params: &SearchParams) -> Result<String, GenerationError> {
        info!("Search tool called");

        let grounded = [Turn::user(Self::grounded_prompt(&params.query))];
        let primary_error = match ctx.generate(&grounded, GenerateOptions::web_grounded()).await {
            Ok(text) => return Ok(text),
            Err(e) => e,
        };

        warn!(
            "Web-grounded search failed, falling back to knowledge base: {}",
            primary_error
        );

        let fallback = [Turn::user(Self::fallback_prompt(&params.query))];
        match ctx.generate(&fallback, GenerateOptions::default()).await {
            Ok(text) => Ok(format!("{}{}", FALLBACK_NOTICE, text)),
            Err(fallback_error) => {
                warn!("Knowledge-base fallback also failed: {}", fallback_error);
                Err(GenerationError::new(Self::FAILURE_PREFIX, primary_error))
            }
        }
    }

    /// Route entry point: parse arguments, execute, and wrap the outcome.
    pub async fn call(
        ctx: ToolContext,
        arguments: JsonObject,
    ) -> Result<CallToolResult, McpError> {
        let params: SearchParams = parse_params(arguments)?;
        Ok(into_call_result(Self::execute(&ctx, &params).await))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the MCP router.
    pub fn create_route<S>(ctx: ToolContext) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        tool_route(Self::to_tool(), ctx, Self::call)
    }
}
