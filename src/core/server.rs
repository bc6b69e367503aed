//! MCP Server implementation.
//!
//! This module contains the protocol handler. Tool calls are dispatched by
//! the rmcp `ToolRouter` built in `domains/tools/router.rs`; adding a tool
//! does not require modifying this file.

use rmcp::{
    ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler,
};
use std::sync::Arc;

use super::config::Config;
use crate::domains::generation::GenerationClient;
use crate::domains::tools::{ToolContext, build_tool_router};

const INSTRUCTIONS: &str = "Gemini tools: `chat` for multi-turn conversation, \
    `search` for current information (web-grounded, with a knowledge-base fallback), \
    `knowledge` for answers from training data only, `analyze` for code/text/data analysis \
    and `generate` for code, documentation, creative or technical content.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. It holds no
/// mutable state; clones share the same configuration and routes.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server backed by `client`.
    pub fn new(config: Config, client: Arc<dyn GenerationClient>) -> Self {
        let ctx = ToolContext::new(client, config.gemini.model.as_str());

        Self {
            tool_router: build_tool_router::<Self>(ctx),
            config: Arc::new(config),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Names of every registered tool.
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect()
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
