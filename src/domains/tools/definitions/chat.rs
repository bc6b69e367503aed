//! Chat tool definition.
//!
//! Multi-turn conversation with Gemini. The caller's history is replayed
//! verbatim and the new message is always appended as a separate user turn.

use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::common::{generate_once, into_call_result, parse_params, tool_route};
use crate::domains::generation::{Role, Turn};
use crate::domains::tools::{GenerationError, ToolContext};

// ============================================================================
// Tool Parameters
// ============================================================================

/// A previous message supplied by the caller.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ConversationTurn {
    /// Who sent the message.
    pub role: Role,

    /// The message text.
    #[serde(alias = "text")]
    pub content: String,
}

impl From<&ConversationTurn> for Turn {
    fn from(turn: &ConversationTurn) -> Self {
        Turn {
            role: turn.role,
            text: turn.content.clone(),
        }
    }
}

/// Parameters for the chat tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatParams {
    /// The message to send to Gemini.
    #[schemars(description = "The message to send to Gemini")]
    pub message: String,

    /// Earlier turns, oldest first.
    #[schemars(description = "Previous messages in the conversation")]
    #[serde(default, alias = "history")]
    pub conversation_history: Vec<ConversationTurn>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Chat tool - sends a message, with optional history, to Gemini.
pub struct ChatTool;

impl ChatTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "chat";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Send a message to Gemini and get a response. Supports multi-turn conversations.";

    /// Prefix attached to every failure of this tool.
    pub const FAILURE_PREFIX: &'static str = "Chat failed";

    /// Conversation sent to the model: history, then the new user message.
    pub fn turns(params: &ChatParams) -> Vec<Turn> {
        params
            .conversation_history
            .iter()
            .map(Turn::from)
            .chain(std::iter::once(Turn::user(params.message.as_str())))
            .collect()
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(history = params.conversation_history.len()))]
    pub async fn execute(ctx: &ToolContext, params: &ChatParams) -> Result<String, GenerationError> {
        info!("Chat tool called");
        generate_once(ctx, &Self::turns(params), Self::FAILURE_PREFIX).await
    }

    /// Route entry point: parse arguments, execute, and wrap the outcome.
    pub async fn call(
        ctx: ToolContext,
        arguments: JsonObject,
    ) -> Result<CallToolResult, McpError> {
        let params: ChatParams = parse_params(arguments)?;
        Ok(into_call_result(Self::execute(&ctx, &params).await))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ChatParams>(),
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
