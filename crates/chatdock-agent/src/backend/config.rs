//! HTTP backend client configuration.

use std::time::Duration;

use chatdock_config::schema::{AskContract, BackendConfig};

#[derive(Debug, Clone, PartialEq)]
pub struct HttpBackendConfig {
    pub base_url: String,
    pub user_id: String,
    pub connect_timeout: Duration,
    /// `None` waits for the backend indefinitely.
    pub request_timeout: Option<Duration>,
    pub ask_contract: AskContract,
}

impl HttpBackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            user_id: "EMP001".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
            ask_contract: AskContract::Structured,
        }
    }

    pub fn from_schema(schema: &BackendConfig) -> Self {
        let request_timeout = match schema.request_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(u64::from(secs))),
        };
        Self {
            base_url: schema.base_url.trim_end_matches('/').to_string(),
            user_id: schema.user_id.clone(),
            connect_timeout: Duration::from_secs(u64::from(schema.connect_timeout_secs)),
            request_timeout,
            ask_contract: schema.ask_contract,
        }
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn with_ask_contract(mut self, contract: AskContract) -> Self {
        self.ask_contract = contract;
        self
    }

    /// Absolute URL for an endpoint path such as `"profiles"`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = HttpBackendConfig::new("http://localhost:8000/");
        assert_eq!(config.endpoint("profiles"), "http://localhost:8000/profiles");
        assert_eq!(config.endpoint("/ask"), "http://localhost:8000/ask");
    }

    #[test]
    fn from_schema_maps_zero_timeout_to_none() {
        let schema = BackendConfig::default();
        let config = HttpBackendConfig::from_schema(&schema);
        assert_eq!(config.request_timeout, None);
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.user_id, "EMP001");
    }

    #[test]
    fn from_schema_keeps_nonzero_timeout() {
        let schema = BackendConfig {
            request_timeout_secs: 45,
            ask_contract: AskContract::Raw,
            ..BackendConfig::default()
        };
        let config = HttpBackendConfig::from_schema(&schema);
        assert_eq!(config.request_timeout, Some(Duration::from_secs(45)));
        assert_eq!(config.ask_contract, AskContract::Raw);
    }
}
