//! Subcommand implementations.

/// Abbreviate command handler.
pub mod abbreviate;

/// Line-mode menu command handler.
pub mod menu;

/// Interactive session command handler.
pub mod session;

/// Topics listing command handler.
pub mod topics;

use anyhow::Result;

use crate::completion::OpenAiClient;
use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};

/// Resolves configuration and builds the completion client.
///
/// Fails with [`crate::config::ConfigError`] when no API key is available
/// or the configuration directory cannot be located.
fn connect(options: &ResolveOptions) -> Result<(OpenAiClient, ResolvedConfig)> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default();
    let config = resolve_config(options, &config_file)?;

    tracing::debug!(
        endpoint = %config.endpoint,
        model = %config.model,
        "completion client configured"
    );

    let client = OpenAiClient::new(
        config.endpoint.clone(),
        config.model.clone(),
        config.api_key.clone(),
        config.max_tokens,
    );
    Ok((client, config))
}
