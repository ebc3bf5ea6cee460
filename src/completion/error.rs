use reqwest::StatusCode;
use thiserror::Error;

/// Classified failure of a completion request.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Failed to reach the AI service at {url}: {message}")]
    Network { url: String, message: String },

    #[error("The AI service at {url} did not respond in time")]
    Timeout { url: String },

    #[error("The AI service rejected the API key (status {status})")]
    Unauthorized { status: StatusCode },

    #[error("The AI service is rate limiting requests, try again shortly")]
    RateLimited,

    #[error("AI request failed with status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("Could not read the AI response: {0}")]
    InvalidResponse(String),

    #[error("The AI service returned an empty answer")]
    EmptyResponse,
}

impl CompletionError {
    /// Maps a non-success HTTP status and body to an error variant.
    pub(crate) fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::Unauthorized { status },
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimited,
            _ => Self::Api { status, body },
        }
    }

    pub(crate) fn from_transport(url: &str, err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
            }
        } else {
            Self::Network {
                url: url.to_string(),
                message: err.to_string(),
            }
        }
    }
}
