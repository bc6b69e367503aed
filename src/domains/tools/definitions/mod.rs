//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod analyze;
pub mod chat;
pub mod common;
pub mod generate;
pub mod knowledge;
pub mod search;

pub use analyze::{AnalysisType, AnalyzeParams, AnalyzeTool};
pub use chat::{ChatParams, ChatTool, ConversationTurn};
pub use generate::{ContentType, GenerateParams, GenerateTool};
pub use knowledge::{KnowledgeParams, KnowledgeTool};
pub use search::{FALLBACK_NOTICE, SearchParams, SearchTool};
