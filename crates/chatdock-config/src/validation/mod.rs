//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod backend;
mod helpers;
mod panel;
mod policies;


use crate::schema::ChatdockConfig;
use chatdock_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ChatdockConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    backend::validate_backend(&mut errors, config);
    panel::validate_panel(&mut errors, config);
    panel::validate_host(&mut errors, config);
    policies::validate_policies(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
