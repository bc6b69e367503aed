//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve `server` on stdin/stdout until the client disconnects.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        info!("Ready - communicating via stdin/stdout");

        service
            .waiting()
            .await
            .map_err(|e| TransportError::service(e.to_string()))?;

        info!("STDIO transport finished");
        Ok(())
    }
}
