//! Shared, immutable state handed to every tool route.

use std::sync::Arc;

use tracing::debug;

use crate::domains::generation::{ClientError, GenerateOptions, GenerationClient, Turn};

/// The generation client and model every tool call runs against.
///
/// Built once at startup and cloned into each route; cloning only bumps
/// reference counts.
#[derive(Clone)]
pub struct ToolContext {
    client: Arc<dyn GenerationClient>,
    model: Arc<str>,
}

impl ToolContext {
    pub fn new(client: Arc<dyn GenerationClient>, model: impl Into<Arc<str>>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Issue one generation call with the configured model.
    pub async fn generate(
        &self,
        turns: &[Turn],
        options: GenerateOptions,
    ) -> Result<String, ClientError> {
        debug!(
            model = %self.model,
            turns = turns.len(),
            grounded = options.web_grounding,
            "Calling generation client"
        );
        self.client.generate(&self.model, turns, options).await
    }
}
