use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use super::error::CompletionError;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_MAX_TOKENS: u32 = 200;

/// Turns a single user prompt into one text completion.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Submits `prompt` as a single user-role message and returns the
    /// trimmed answer.
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Client for `POST {endpoint}/v1/chat/completions`.
pub struct OpenAiClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
    max_tokens: Option<u32>,
}

impl OpenAiClient {
    pub fn new(endpoint: String, model: String, api_key: String, max_tokens: Option<u32>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            model,
            api_key,
            max_tokens,
        }
    }

    fn url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    #[instrument(level = "debug", skip_all, fields(model = %self.model))]
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let url = self.url();

        let chat_request = ChatCompletionRequest {
            model: &self.model,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.max_tokens,
        };

        debug!(%url, prompt_len = prompt.len(), "sending completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                warn!(%url, error = %e, "completion request failed");
                CompletionError::from_transport(&url, &e)
            })?;

        let status = response.status();
        debug!(%status, "completion response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "completion request rejected");
            return Err(CompletionError::from_status(status, body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| CompletionError::from_transport(&url, &e))?;

        parse_completion(&body)
    }
}

/// Extracts the first choice's content from a chat completion body.
fn parse_completion(body: &str) -> Result<String, CompletionError> {
    let response: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| CompletionError::InvalidResponse(e.to_string()))?;

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| CompletionError::InvalidResponse("no choices in response".to_string()))?;

    let content = choice.message.content.unwrap_or_default();
    let content = content.trim();

    if content.is_empty() {
        Err(CompletionError::EmptyResponse)
    } else {
        Ok(content.to_string())
    }
}
