//! Backend connection configuration.

use serde::{Deserialize, Serialize};

/// How the body of a successful `/ask` response is interpreted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum AskContract {
    /// `{"response": "..."}`
    #[default]
    Structured,
    /// The JSON payload itself is the display text.
    Raw,
}

/// Conversational backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL every endpoint is resolved against.
    pub base_url: String,
    /// Sent as the `user-id` header on profile switches.
    pub user_id: String,
    pub connect_timeout_secs: u32,
    /// Total request timeout. 0 disables it.
    pub request_timeout_secs: u32,
    pub ask_contract: AskContract,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".into(),
            user_id: "EMP001".into(),
            connect_timeout_secs: 10,
            request_timeout_secs: 0,
            ask_contract: AskContract::Structured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = BackendConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.user_id, "EMP001");
        assert_eq!(config.request_timeout_secs, 0);
        assert_eq!(config.ask_contract, AskContract::Structured);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: BackendConfig = toml::from_str(
            r#"
base_url = "https://chat.example.com"
ask_contract = "raw"
"#,
        )
        .unwrap();
        assert_eq!(config.base_url, "https://chat.example.com");
        assert_eq!(config.ask_contract, AskContract::Raw);
        assert_eq!(config.connect_timeout_secs, 10);
    }
}
