//! Domains module containing business logic organized by bounded contexts.
//!
//! - **generation**: the boundary to the hosted language model
//! - **tools**: the MCP tools exposed to clients

pub mod generation;
pub mod tools;
