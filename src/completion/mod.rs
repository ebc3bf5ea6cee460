//! Completion client for OpenAI-compatible chat APIs.
//!
//! Frontends depend on the [`CompletionClient`] trait so tests can swap in a
//! stub; [`OpenAiClient`] is the HTTP implementation.

mod client;
mod error;
pub mod prompt;

pub use client::{
    CompletionClient, DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, OpenAiClient,
};
pub use error::CompletionError;

#[cfg(test)]
pub(crate) mod test_support;
