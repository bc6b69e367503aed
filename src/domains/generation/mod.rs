//! Generation domain module.
//!
//! This module is the boundary between the tool handlers and the hosted
//! language model. Handlers only see the [`GenerationClient`] trait; the
//! concrete Gemini REST client lives in `gemini.rs`.
//!
//! ## Architecture
//!
//! - `mod.rs` - Conversation types and the client trait
//! - `gemini.rs` - reqwest-based Gemini `generateContent` client
//! - `error.rs` - Client error types

mod error;
pub mod gemini;

#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use error::ClientError;
pub use gemini::GeminiClient;

/// Speaker of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// One message of a conversation, in chronological order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

/// Per-call capability toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Ground the response with live web search results.
    pub web_grounding: bool,
}

impl GenerateOptions {
    pub fn web_grounded() -> Self {
        Self {
            web_grounding: true,
        }
    }
}

/// A hosted text-generation backend.
///
/// Implementations turn an ordered conversation into a single text reply.
/// They hold no per-request state, so one instance is shared by every tool
/// call for the lifetime of the process.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Generate a reply for `turns` using `model`.
    async fn generate(
        &self,
        model: &str,
        turns: &[Turn],
        options: GenerateOptions,
    ) -> Result<String, ClientError>;
}
