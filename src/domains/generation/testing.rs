//! Scripted in-process generation client for handler tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{ClientError, GenerateOptions, GenerationClient, Turn};

/// A call observed by [`ScriptedClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub model: String,
    pub turns: Vec<Turn>,
    pub web_grounding: bool,
}

type Reply = dyn Fn(&RecordedCall) -> Result<String, ClientError> + Send + Sync;

/// Generation client whose replies are computed from the incoming call.
pub struct ScriptedClient {
    reply: Box<Reply>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedClient {
    pub fn new<F>(reply: F) -> Arc<Self>
    where
        F: Fn(&RecordedCall) -> Result<String, ClientError> + Send + Sync + 'static,
    {
        Arc::new(Self {
            reply: Box::new(reply),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Always answer with `text`.
    pub fn replying(text: &str) -> Arc<Self> {
        let text = text.to_string();
        Self::new(move |_| Ok(text.clone()))
    }

    /// Always fail with an API error carrying `message`.
    pub fn failing(message: &str) -> Arc<Self> {
        let message = message.to_string();
        Self::new(move |_| Err(ClientError::api(500, message.clone())))
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationClient for ScriptedClient {
    async fn generate(
        &self,
        model: &str,
        turns: &[Turn],
        options: GenerateOptions,
    ) -> Result<String, ClientError> {
        let call = RecordedCall {
            model: model.to_string(),
            turns: turns.to_vec(),
            web_grounding: options.web_grounding,
        };
        let reply = (self.reply)(&call);
        self.calls.lock().unwrap().push(call);
        reply
    }
}
