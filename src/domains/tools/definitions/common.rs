//! Common utilities shared across the Gemini tools.
//!
//! Every tool exposes an async `call(ctx, arguments)` entry point that parses
//! its parameters, runs `execute` and converts the outcome into an MCP
//! result. [`tool_route`] wraps such an entry point into an rmcp route.
//! Four of the five tools make exactly one generation call and tag any
//! failure with a fixed prefix; [`generate_once`] captures that shape.

use std::future::Future;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, Content, JsonObject, Tool},
};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::domains::generation::{GenerateOptions, Turn};
use crate::domains::tools::{GenerationError, ToolContext};

/// Deserialize tool arguments, reporting shape errors as invalid params.
pub fn parse_params<P: DeserializeOwned>(arguments: JsonObject) -> Result<P, McpError> {
    serde_json::from_value(serde_json::Value::Object(arguments))
        .map_err(|e| McpError::invalid_params(e.to_string(), None))
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Convert a handler outcome into the MCP result envelope.
pub fn into_call_result(outcome: Result<String, GenerationError>) -> CallToolResult {
    match outcome {
        Ok(text) => success_result(text),
        Err(e) => error_result(e.message()),
    }
}

/// Make one ungrounded generation call, wrapping failures with `failure_prefix`.
pub async fn generate_once(
    ctx: &ToolContext,
    turns: &[Turn],
    failure_prefix: &str,
) -> Result<String, GenerationError> {
    ctx.generate(turns, GenerateOptions::default())
        .await
        .map_err(|e| GenerationError::new(failure_prefix, e))
}

/// Build an rmcp route that forwards every call to a tool's `call` entry point.
pub fn tool_route<S, F, Fut>(tool: Tool, ctx: ToolContext, call: F) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
    F: Fn(ToolContext, JsonObject) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<CallToolResult, McpError>> + Send + 'static,
{
    ToolRoute::new_dyn(tool, move |request: ToolCallContext<'_, S>| {
        let args = request.arguments.clone().unwrap_or_default();
        call(ctx.clone(), args).boxed()
    })
}

/// Build an argument object from a JSON literal.
#[cfg(test)]
pub(crate) fn json_arguments(value: serde_json::Value) -> JsonObject {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("Expected a JSON object, got {}", other),
    }
}

/// Extract the single text content of a tool result.
#[cfg(test)]
pub(crate) fn result_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::generation::testing::ScriptedClient;

    #[tokio::test]
    async fn test_generate_once_success() {
        let client = ScriptedClient::replying("pong");
        let ctx = ToolContext::new(client.clone(), "gemini-test");

        let text = generate_once(&ctx, &[Turn::user("ping")], "Ping failed")
            .await
            .unwrap();

        assert_eq!(text, "pong");
        let calls = client.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].model, "gemini-test");
        assert!(!calls[0].web_grounding);
    }

    #[tokio::test]
    async fn test_generate_once_wraps_failure() {
        let ctx = ToolContext::new(ScriptedClient::failing("quota exhausted"), "gemini-test");

        let err = generate_once(&ctx, &[Turn::user("ping")], "Ping failed")
            .await
            .unwrap_err();

        assert!(err.message().starts_with("Ping failed: "));
        assert!(err.message().contains("quota exhausted"));
    }

    #[test]
    fn test_into_call_result() {
        let ok = into_call_result(Ok("done".to_string()));
        assert!(!ok.is_error.unwrap_or(false));
        assert_eq!(result_text(&ok), "done");

        let err = into_call_result(Err(GenerationError::new("Analysis failed", "boom")));
        assert!(err.is_error.unwrap_or(false));
        assert_eq!(result_text(&err), "Analysis failed: boom");
    }

    #[test]
    fn test_parse_params_rejects_wrong_shape() {
        #[derive(Debug, serde::Deserialize)]
        struct QueryOnly {
            #[allow(dead_code)]
            query: String,
        }

        let mut args = JsonObject::new();
        args.insert("query".to_string(), serde_json::json!(42));
        assert!(parse_params::<QueryOnly>(args).is_err());
    }
}
