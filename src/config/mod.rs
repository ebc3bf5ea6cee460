//! Configuration file loading and resolution.

mod manager;

pub use manager::{
    AssistantConfig, ConfigError, ConfigFile, ConfigManager, DEFAULT_API_KEY_ENV,
    ResolveOptions, ResolvedConfig, resolve_config,
};
