//! Generate tool definition.

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

/// Kind of content to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Code,
    Documentation,
    Creative,
    Technical,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Documentation => "documentation",
            Self::Creative => "creative",
            Self::Technical => "technical",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for the generate tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateParams {
    /// The generation prompt.
    #[schemars(description = "The generation prompt")]
    pub prompt: String,

    /// Type of content to generate.
    #[schemars(description = "Type of content to generate")]
    pub content_type: ContentType,
}

/// Generate tool - produces code, documentation, creative or technical text.
pub struct GenerateTool;

impl GenerateTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "generate";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Generate content like code, documentation, or creative text";

    /// Prefix attached to every failure of this tool.
    pub const FAILURE_PREFIX: &'static str = "Generation failed";

    /// Conversation sent to the model: the filled-in template as one user turn.
    pub fn turns(params: &GenerateParams) -> Vec<Turn> {
        vec![Turn::user(format!(
            "Generate {} content based on this request:\n\n{}",
            params.content_type, params.prompt
        ))]
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(content_type = %params.content_type))]
    pub async fn execute(
        ctx: &ToolContext,
        params: &GenerateParams,
    ) -> Result<String, GenerationError> {
        info!("Generate tool called");
        generate_once(ctx, &Self::turns(params), Self::FAILURE_PREFIX).await
    }

    /// Route entry point: parse arguments, execute, and wrap the outcome.
    pub async fn call(
        ctx: ToolContext,
        arguments: JsonObject,
    ) -> Result<CallToolResult, McpError> {
        let params: GenerateParams = parse_params(arguments)?;
        Ok(into_call_result(Self::execute(&ctx, &params).await))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GenerateParams>(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::generation::testing::ScriptedClient;
    use crate::domains::tools::definitions::common::{json_arguments, result_text};

    #[test]
    fn test_prompt_contains_type_and_request() {
        let params = GenerateParams {
            prompt: "a haiku about borrow checking".to_string(),
            content_type: ContentType::Creative,
        };
        let turns = GenerateTool::turns(&params);

        assert_eq!(
            turns,
            vec![Turn::user(
                "Generate creative content based on this request:\n\na haiku about borrow checking"
            )]
        );
    }

    #[test]
    fn test_unknown_content_type_rejected() {
        let result = serde_json::from_value::<GenerateParams>(serde_json::json!({
            "prompt": "x",
            "contentType": "poem"
        }));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_execute_is_repeatable() {
        let client = ScriptedClient::new(|call| Ok(format!("echo: {}", call.turns[0].text)));
        let ctx = ToolContext::new(client.clone(), "gemini-test");
        let params = GenerateParams {
            prompt: "README for a CLI".to_string(),
            content_type: ContentType::Documentation,
        };

        let first = GenerateTool::execute(&ctx, &params).await.unwrap();
        let second = GenerateTool::execute(&ctx, &params).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(client.calls()[0], client.calls()[1]);
    }

    #[tokio::test]
    async fn test_failure_prefix() {
        let ctx = ToolContext::new(ScriptedClient::failing("quota"), "gemini-test");
        let params = GenerateParams {
            prompt: "x".to_string(),
            content_type: ContentType::Code,
        };

        let err = GenerateTool::execute(&ctx, &params).await.unwrap_err();
        assert!(err.message().starts_with("Generation failed: "));
    }

    #[tokio::test]
    async fn test_call_failure_is_error_result() {
        let ctx = ToolContext::new(ScriptedClient::failing("quota"), "gemini-test");

        let result = GenerateTool::call(
            ctx,
            json_arguments(serde_json::json!({
                "prompt": "x",
                "contentType": "code"
            })),
        )
        .await
        .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).starts_with("Generation failed: "));
        assert!(result_text(&result).contains("quota"));
    }

    #[tokio::test]
    async fn test_call_rejects_unknown_content_type() {
        let client = ScriptedClient::replying("unused");
        let ctx = ToolContext::new(client.clone(), "gemini-test");

        let err = GenerateTool::call(
            ctx,
            json_arguments(serde_json::json!({
                "prompt": "x",
                "contentType": "poem"
            })),
        )
        .await
        .unwrap_err();

        assert_eq!(err.code.0, -32602);
        assert!(client.calls().is_empty());
    }
}
