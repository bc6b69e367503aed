//! MCP Server Entry Point
//!
//! Loads configuration, initializes logging, and serves the Gemini tools
//! over stdio. A missing `GEMINI_API_KEY` aborts startup with a non-zero
//! exit status before the transport is opened.

use std::sync::Arc;

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use gemini_mcp_server::core::{Config, McpServer, StdioTransport};
use gemini_mcp_server::domains::generation::GeminiClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);
    info!("Using model {}", config.gemini.model);

    let client = GeminiClient::new(&config.gemini)?;
    let server = McpServer::new(config, Arc::new(client));

    info!("Server initialized with tools: {}", server.tool_names().join(", "));

    StdioTransport::run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout is reserved for the MCP channel.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();
}
