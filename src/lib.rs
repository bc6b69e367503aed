//! Gemini MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that exposes
//! five Gemini-backed tools over stdio: `chat`, `search`, `knowledge`,
//! `analyze` and `generate`.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP handler and the stdio transport
//! - **domains**: business logic organized by bounded contexts
//!   - **generation**: the client boundary to the hosted model
//!   - **tools**: the MCP tools that can be executed by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use gemini_mcp_server::core::{Config, McpServer, StdioTransport};
//! use gemini_mcp_server::domains::generation::GeminiClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = GeminiClient::new(&config.gemini)?;
//!     let server = McpServer::new(config, Arc::new(client));
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
