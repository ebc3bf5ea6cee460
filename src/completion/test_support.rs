use async_trait::async_trait;
use std::sync::Mutex;

use super::{CompletionClient, CompletionError};

/// Stub client that records prompts and replays a fixed outcome.
pub struct RecordingClient {
    reply: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl RecordingClient {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails with [`CompletionError::RateLimited`].
    pub fn failing() -> Self {
        Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    #[allow(clippy::unwrap_used)]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for RecordingClient {
    #[allow(clippy::unwrap_used)]
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().ok_or(CompletionError::RateLimited)
    }
}
