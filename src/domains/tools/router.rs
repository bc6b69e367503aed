//! Tool Router - builds the rmcp ToolRouter.
//!
//! Each tool knows how to create its own route; this module only collects
//! them.

use rmcp::handler::server::tool::ToolRouter;

use super::ToolContext;
use super::definitions::{AnalyzeTool, ChatTool, GenerateTool, KnowledgeTool, SearchTool};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(ctx: ToolContext) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(ChatTool::create_route(ctx.clone()))
        .with_route(SearchTool::create_route(ctx.clone()))
        .with_route(KnowledgeTool::create_route(ctx.clone()))
        .with_route(AnalyzeTool::create_route(ctx.clone()))
        .with_route(GenerateTool::create_route(ctx))
}
