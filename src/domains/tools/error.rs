//! Tool-specific error types.

use std::fmt;

use thiserror::Error;

/// Failure of a tool invocation.
///
/// Carries only a human-readable message: the tool's fixed failure prefix
/// followed by the underlying cause. MCP clients see this text verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GenerationError {
    message: String,
}

impl GenerationError {
    /// Wrap `cause` with a tool-specific `prefix` (e.g. "Chat failed").
    pub fn new(prefix: &str, cause: impl fmt::Display) -> Self {
        Self {
            message: format!("{}: {}", prefix, cause),
        }
    }

    /// The message reported to the client.
    pub fn message(&self) -> &str {
        &self.message
    }
}
