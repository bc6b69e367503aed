//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type for startup and infrastructure
//! failures. Tool-level failures never reach it: they are reported to the
//! MCP client as error results.

use thiserror::Error;

use super::transport::TransportError;
use crate::domains::generation::ClientError;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The generation client could not be built.
    #[error("Generation client error: {0}")]
    Client(#[from] ClientError),

    /// The transport failed to start or terminated abnormally.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
