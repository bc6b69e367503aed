//! Transport layer for the MCP server.
//!
//! The server speaks MCP over standard input/output only. Stdout carries
//! the JSON-RPC channel, so every log line goes to stderr.

mod error;
pub mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
