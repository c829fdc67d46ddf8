//! Chatdock configuration system.
//!
//! TOML-based configuration with validation and environment overrides.
//! All sections use defaults so partial configs work out of the box.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{ChatdockConfig, CONFIG_SCHEMA_VERSION};

use chatdock_common::ConfigError;
use std::path::Path;

/// Environment variable that replaces `backend.base_url`.
pub const BASE_URL_ENV: &str = "CHATDOCK_API_BASE_URL";

/// Load config from `path`, or from the platform default path when `None`,
/// then apply environment overrides and validate.
pub fn load_config(path: Option<&Path>) -> Result<ChatdockConfig, ConfigError> {
    let mut config = match path {
        Some(p) => toml_loader::load_from_path(p)?,
        None => toml_loader::load_default()?,
    };
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    validation::validate(&config)?;
    Ok(config)
}

/// Apply overrides from an environment lookup. Empty values are ignored.
pub fn apply_env_overrides<F>(config: &mut ChatdockConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
        tracing::debug!(%url, "backend base URL overridden from environment");
        config.backend.base_url = url.trim().trim_end_matches('/').to_string();
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ChatdockConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
