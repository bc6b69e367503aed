//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Every tool turns its parameters into one or two calls against the
//! generation client and returns the resulting text.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - ToolRouter builder
//! - `context.rs` - Client and model shared by every route
//! - `error.rs` - Tool failure type
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define params, `to_tool()` and `create_route()`
//! 3. Export in `definitions/mod.rs`
//! 4. Add the route in `router.rs` using `with_route()`

mod context;
pub mod definitions;
mod error;
pub mod router;

pub use context::ToolContext;
pub use error::GenerationError;
pub use router::build_tool_router;
