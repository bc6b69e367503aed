//! Knowledge tool definition.
//!
//! Answers from the model's training data only; no web grounding.

use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::common::{generate_once, into_call_result, parse_params, tool_route};
use crate::domains::generation::Turn;
use crate::domains::tools::{GenerationError, ToolContext};

/// Parameters for the knowledge tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct KnowledgeParams {
    /// The knowledge query.
    #[schemars(description = "The knowledge query")]
    pub query: String,
}

/// Knowledge tool - queries Gemini's training data.
pub struct KnowledgeTool;

impl KnowledgeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "knowledge";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Query Gemini's knowledge base (training data) without web search";

    /// Prefix attached to every failure of this tool.
    pub const FAILURE_PREFIX: &'static str = "Knowledge query failed";

    /// Conversation sent to the model: the filled-in template as one user turn.
    pub fn turns(params: &KnowledgeParams) -> Vec<Turn> {
        vec![Turn::user(format!(
            "Based on your training data and knowledge, provide information about: {}\n\n\
             Provide a comprehensive answer with relevant details.",
            params.query
        ))]
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(query = %params.query))]
    pub async fn execute(
        ctx: &ToolContext,
        params: &KnowledgeParams,
    ) -> Result<String, GenerationError> {
        info!("Knowledge tool called");
        generate_once(ctx, &Self::turns(params), Self::FAILURE_PREFIX).await
    }

    /// Route entry point: parse arguments, execute, and wrap the outcome.
    pub async fn call(
        ctx: ToolContext,
        arguments: JsonObject,
    ) -> Result<CallToolResult, McpError> {
        let params: KnowledgeParams = parse_params(arguments)?;
        Ok(into_call_result(Self::execute(&ctx, &params).await))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<KnowledgeParams>(),
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
