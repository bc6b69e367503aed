//! Analyze tool definition.

use std::fmt;

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

/// Kind of material being analyzed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisType {
    Code,
    Text,
    Data,
    General,
}

impl AnalysisType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Text => "text",
            Self::Data => "data",
            Self::General => "general",
        }
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for the analyze tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeParams {
    /// The content to analyze.
    #[schemars(description = "The content to analyze")]
    pub content: String,

    /// Type of analysis to perform.
    #[schemars(description = "Type of analysis to perform")]
    pub analysis_type: AnalysisType,
}

/// Analyze tool - detailed analysis of text, code, or data.
pub struct AnalyzeTool;

impl AnalyzeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "analyze";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Analyze text, code, or data with Gemini";

    /// Prefix attached to every failure of this tool.
    pub const FAILURE_PREFIX: &'static str = "Analysis failed";

    /// Conversation sent to the model: the filled-in template as one user turn.
    pub fn turns(params: &AnalyzeParams) -> Vec<Turn> {
        vec![Turn::user(format!(
            "Analyze the following {}:\n\n{}\n\nProvide a detailed analysis.",
            params.analysis_type, params.content
        ))]
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(analysis_type = %params.analysis_type))]
    pub async fn execute(ctx: &ToolContext, params: &AnalyzeParams) -> Result<String, GenerationError> {
        info!("Analyze tool called ({} bytes)", params.content.len());
        generate_once(ctx, &Self::turns(params), Self::FAILURE_PREFIX).await
    }

    /// Route entry point: parse arguments, execute, and wrap the outcome.
    pub async fn call(
        ctx: ToolContext,
        arguments: JsonObject,
    ) -> Result<CallToolResult, McpError> {
        let params: AnalyzeParams = parse_params(arguments)?;
        Ok(into_call_result(Self::execute(&ctx, &params).await))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<AnalyzeParams>(),
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
