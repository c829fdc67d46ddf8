//! HTTP backend client struct, response checking and body parsing.

use chatdock_config::schema::AskContract;
use serde::Deserialize;

use crate::{AgentProfile, BackendError};

use super::config::HttpBackendConfig;

/// Longest error body excerpt kept in a [`BackendError::Status`].
const ERROR_BODY_LIMIT: usize = 200;

#[derive(Debug, Deserialize)]
struct ProfilesBody {
    #[serde(default)]
    profiles: Vec<AgentProfile>,
}

#[derive(Debug, Deserialize)]
struct AskBody {
    response: String,
}

/// reqwest client for the conversational backend.
///
/// The cookie store is enabled so every request carries the server-side
/// session cookie.
pub struct HttpBackend {
    pub(crate) config: HttpBackendConfig,
    pub(crate) http: reqwest::Client,
}

impl HttpBackend {
    pub fn new(config: HttpBackendConfig) -> Result<Self, BackendError> {
        let mut builder = reqwest::Client::builder()
            .cookie_store(true)
            .connect_timeout(config.connect_timeout);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| BackendError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &HttpBackendConfig {
        &self.config
    }

    /// Turn a non-2xx response into [`BackendError::Status`].
    pub(crate) async fn check_status(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text().await.unwrap_or_default();
        Err(BackendError::Status {
            status: status.as_u16(),
            body: text.chars().take(ERROR_BODY_LIMIT).collect(),
        })
    }

    pub(crate) fn parse_profiles(json: serde_json::Value) -> Result<Vec<AgentProfile>, BackendError> {
        serde_json::from_value::<ProfilesBody>(json)
            .map(|body| body.profiles)
            .map_err(|e| BackendError::Parse(format!("profiles: {e}")))
    }

    pub(crate) fn parse_answer(
        contract: AskContract,
        json: serde_json::Value,
    ) -> Result<String, BackendError> {
        match contract {
            AskContract::Structured => serde_json::from_value::<AskBody>(json)
                .map(|body| body.response)
                .map_err(|e| BackendError::Parse(format!("ask: {e}"))),
            AskContract::Raw => Ok(match json {
                serde_json::Value::String(text) => text,
                other => other.to_string(),
            }),
        }
    }
}

pub(crate) fn map_reqwest_error(e: reqwest::Error) -> BackendError {
    if e.is_timeout() {
        BackendError::Timeout
    } else if e.is_decode() {
        BackendError::Parse(e.to_string())
    } else {
        BackendError::Network(e.to_string())
    }
}
