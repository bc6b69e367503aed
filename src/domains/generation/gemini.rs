//! Gemini REST client.
//!
//! Calls `POST {base_url}/models/{model}:generateContent` and reduces the
//! response to plain text. Web grounding is requested by attaching the
//! `google_search` tool to the request.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::{ClientError, GenerateOptions, GenerationClient, Role, Turn};
use crate::core::config::GeminiConfig;

const API_KEY_HEADER: &str = "x-goog-api-key";

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<WireContent<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<WireTool>,
}

#[derive(Debug, Serialize)]
struct WireContent<'a> {
    role: Role,
    parts: [WirePart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct WirePart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct WireTool {
    google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
struct GoogleSearch {}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl<'a> GenerateContentRequest<'a> {
    fn new(turns: &'a [Turn], options: GenerateOptions) -> Self {
        let contents = turns
            .iter()
            .map(|turn| WireContent {
                role: turn.role,
                parts: [WirePart { text: &turn.text }],
            })
            .collect();

        let tools = if options.web_grounding {
            vec![WireTool {
                google_search: GoogleSearch {},
            }]
        } else {
            Vec::new()
        };

        Self { contents, tools }
    }
}

impl GenerateContentResponse {
    /// Concatenate the visible text of the first candidate.
    fn into_text(self) -> Result<String, ClientError> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            return Err(match self.prompt_feedback.and_then(|f| f.block_reason) {
                Some(reason) => ClientError::blocked(reason),
                None => ClientError::empty_response("no candidates"),
            });
        };

        let text: String = candidate
            .content
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter(|part| !part.thought)
            .filter_map(|part| part.text)
            .collect();

        if text.is_empty() {
            let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".to_string());
            return Err(ClientError::empty_response(reason));
        }

        Ok(text)
    }
}

// ============================================================================
// Client
// ============================================================================

/// Gemini `generateContent` client.
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GeminiClient {
    /// Create a client from the Gemini section of the configuration.
    pub fn new(config: &GeminiConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    #[instrument(skip(self, turns), fields(turns = turns.len(), grounded = options.web_grounding))]
    async fn generate(
        &self,
        model: &str,
        turns: &[Turn],
        options: GenerateOptions,
    ) -> Result<String, ClientError> {
        debug!("Sending generateContent request");

        let response = self
            .http
            .post(self.endpoint(model))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&GenerateContentRequest::new(turns, options))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = api_error_message(status, &body);
            warn!("Gemini API returned {}: {}", status, message);
            return Err(ClientError::api(status.as_u16(), message));
        }

        let body: GenerateContentResponse = response.json().await?;
        body.into_text()
    }
}

/// Pick the most useful description of a failed API call.
fn api_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ApiErrorEnvelope>(body) {
        return envelope.error.message;
    }
    let body = body.trim();
    if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn test_config(base_url: String) -> GeminiConfig {
        GeminiConfig {
            api_key: "test-key".to_string(),
            base_url,
            ..GeminiConfig::default()
        }
    }

    fn parse(body: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_request_body_without_grounding() {
        let turns = vec![Turn::user("hi"), Turn::model("hello"), Turn::user("bye")];
        let body = serde_json::to_value(GenerateContentRequest::new(
            &turns,
            GenerateOptions::default(),
        ))
        .unwrap();

        assert_eq!(
            body,
            json!({
                "contents": [
                    {"role": "user", "parts": [{"text": "hi"}]},
                    {"role": "model", "parts": [{"text": "hello"}]},
                    {"role": "user", "parts": [{"text": "bye"}]}
                ]
            })
        );
    }

    #[test]
    fn test_request_body_with_grounding() {
        let turns = vec![Turn::user("news")];
        let body = serde_json::to_value(GenerateContentRequest::new(
            &turns,
            GenerateOptions::web_grounded(),
        ))
        .unwrap();

        assert_eq!(body["tools"], json!([{"google_search": {}}]));
    }

    #[test]
    fn test_text_skips_thought_parts() {
        let response = parse(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [
                    {"text": "thinking...", "thought": true},
                    {"text": "Hello, "},
                    {"text": "world"}
                ]},
                "finishReason": "STOP"
            }]
        }));
        assert_eq!(response.into_text().unwrap(), "Hello, world");
    }

    #[test]
    fn test_blocked_prompt() {
        let response = parse(json!({"promptFeedback": {"blockReason": "SAFETY"}}));
        let err = response.into_text().unwrap_err();
        assert!(matches!(err, ClientError::Blocked { ref reason } if reason == "SAFETY"));
    }

    #[test]
    fn test_candidate_without_text() {
        let response = parse(json!({"candidates": [{"finishReason": "MAX_TOKENS"}]}));
        let err = response.into_text().unwrap_err();
        assert!(err.to_string().contains("MAX_TOKENS"));
    }

    #[test]
    fn test_api_error_message_fallbacks() {
        let envelope = r#"{"error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}}"#;
        assert_eq!(
            api_error_message(StatusCode::TOO_MANY_REQUESTS, envelope),
            "Quota exceeded"
        );
        assert_eq!(
            api_error_message(StatusCode::BAD_GATEWAY, "upstream down"),
            "upstream down"
        );
        assert_eq!(
            api_error_message(StatusCode::SERVICE_UNAVAILABLE, ""),
            "Service Unavailable"
        );
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let client = GeminiClient::new(&test_config("http://localhost".to_string())).unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("test-key"));
    }

    #[tokio::test]
    async fn test_generate_sends_grounded_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/models/gemini-test:generateContent")
            .match_header(API_KEY_HEADER, "test-key")
            .match_body(Matcher::PartialJson(json!({
                "contents": [{"role": "user", "parts": [{"text": "latest rust release"}]}],
                "tools": [{"google_search": {}}]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({"candidates": [{"content": {"parts": [{"text": "Rust 1.90"}]}}]})
                    .to_string(),
            )
            .create_async()
            .await;

        let client = GeminiClient::new(&test_config(server.url())).unwrap();
        let text = client
            .generate(
                "gemini-test",
                &[Turn::user("latest rust release")],
                GenerateOptions::web_grounded(),
            )
            .await
            .unwrap();

        assert_eq!(text, "Rust 1.90");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_surfaces_api_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/models/gemini-test:generateContent")
            .with_status(403)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": {"code": 403, "message": "API key not valid"}}"#)
            .create_async()
            .await;

        let client = GeminiClient::new(&test_config(format!("{}/", server.url()))).unwrap();
        let err = client
            .generate("gemini-test", &[Turn::user("hi")], GenerateOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Api { status: 403, .. }));
        assert!(err.to_string().contains("API key not valid"));
    }
}
