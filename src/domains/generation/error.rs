//! Generation client error types.

use thiserror::Error;

/// Errors returned by a [`GenerationClient`](super::GenerationClient).
///
/// The `Display` text of each variant is what tool handlers embed in the
/// message shown to MCP clients.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced an HTTP response (connect, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The prompt was rejected before any candidate was produced.
    #[error("Prompt blocked: {reason}")]
    Blocked { reason: String },

    /// The response carried no text.
    #[error("Response contained no text (finish reason: {finish_reason})")]
    EmptyResponse { finish_reason: String },
}

impl ClientError {
    /// Create a new API error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a new "blocked" error.
    pub fn blocked(reason: impl Into<String>) -> Self {
        Self::Blocked {
            reason: reason.into(),
        }
    }

    /// Create a new "empty response" error.
    pub fn empty_response(finish_reason: impl Into<String>) -> Self {
        Self::EmptyResponse {
            finish_reason: finish_reason.into(),
        }
    }
}
