use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::completion::{DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
use crate::paths;

/// Environment variable holding the API key unless configured otherwise.
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Settings in the `[assistant]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Model identifier sent with each request.
    pub model: Option<String>,
    /// The OpenAI-compatible API endpoint URL.
    pub endpoint: Option<String>,
    /// Environment variable name containing the API key.
    pub api_key_env: Option<String>,
    /// API key stored directly in config (not recommended).
    pub api_key: Option<String>,
    /// Upper bound on answer length.
    pub max_tokens: Option<u32>,
    /// Directory exported notes are written to.
    pub notes_dir: Option<PathBuf>,
}

impl AssistantConfig {
    pub fn api_key_env(&self) -> &str {
        self.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV)
    }

    /// Gets the API key, preferring the environment over the config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Ok(key) = std::env::var(self.api_key_env())
            && !key.trim().is_empty()
        {
            return Some(key);
        }
        self.api_key.clone().filter(|key| !key.trim().is_empty())
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/nurse-assist/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub assistant: AssistantConfig,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub notes_dir: Option<PathBuf>,
}

/// Configuration after merging CLI options, config file and defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: String,
    pub max_tokens: Option<u32>,
    pub notes_dir: PathBuf,
}

/// Fatal configuration problems.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Missing API key\n\n\
         Set the {env_var} environment variable (or add it to a .env file):\n  \
         export {env_var}=\"your-api-key\"\n\n\
         Or set api_key in ~/.config/nurse-assist/config.toml"
    )]
    MissingApiKey { env_var: String },

    #[error("Could not locate the configuration directory: {0}")]
    ConfigDir(String),
}

/// Resolves configuration; CLI options win over the config file, which wins
/// over built-in defaults.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig, ConfigError> {
    let file = &config_file.assistant;

    let api_key = file
        .get_api_key()
        .ok_or_else(|| ConfigError::MissingApiKey {
            env_var: file.api_key_env().to_string(),
        })?;

    let endpoint = options
        .endpoint
        .clone()
        .or_else(|| file.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let model = options
        .model
        .clone()
        .or_else(|| file.model.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    // Zero in the file means "no limit".
    let max_tokens = match file.max_tokens {
        Some(0) => None,
        Some(n) => Some(n),
        None => Some(DEFAULT_MAX_TOKENS),
    };

    let notes_dir = options
        .notes_dir
        .clone()
        .or_else(|| file.notes_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(ResolvedConfig {
        endpoint,
        model,
        api_key,
        max_tokens,
        notes_dir,
    })
}

/// Loads the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Configuration is read from `$XDG_CONFIG_HOME/nurse-assist/config.toml`
    /// or `~/.config/nurse-assist/config.toml`.
    pub fn new() -> Result<Self, ConfigError> {
        let dir = paths::config_dir().map_err(|err| ConfigError::ConfigDir(format!("{err:#}")))?;
        Ok(Self {
            config_path: dir.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(config_file)
    }

    /// Loads the file, falling back to defaults when it is absent or broken.
    pub fn load_or_default(&self) -> ConfigFile {
        if !self.config_path.exists() {
            tracing::debug!(path = %self.config_path.display(), "no config file, using defaults");
            return ConfigFile::default();
        }

        self.load().unwrap_or_else(|err| {
            tracing::warn!("{err:#}; using default configuration");
            ConfigFile::default()
        })
    }
}
