//! ChatBackend trait implementation for HttpBackend.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::{AgentProfile, AskRequest, BackendError, ChatBackend};

use super::client::{map_reqwest_error, HttpBackend};

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn list_profiles(&self) -> Result<Vec<AgentProfile>, BackendError> {
        let url = self.config.endpoint("profiles");
        debug!(%url, "fetching profiles");

        let response = self.http.get(&url).send().await.map_err(map_reqwest_error)?;
        let json: serde_json::Value = Self::check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))?;

        Self::parse_profiles(json)
    }

    async fn switch_profile(&self, title: &str) -> Result<(), BackendError> {
        let url = self
            .config
            .endpoint(&format!("switch-profile/{}", urlencoding::encode(title)));
        debug!(%url, profile = title, "switching profile");

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header("user-id", &self.config.user_id)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        // Body is an acknowledgement only.
        Self::check_status(response).await.map(|_| ())
    }

    async fn ask(&self, request: &AskRequest) -> Result<String, BackendError> {
        let url = self.config.endpoint("ask");
        debug!(%url, policy_keys = request.policy_keys.len(), "asking backend");

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let json: serde_json::Value = Self::check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))?;

        Self::parse_answer(self.config.ask_contract, json)
    }

    async fn clear_session(&self) -> Result<(), BackendError> {
        let url = self.config.endpoint("clear-session");
        debug!(%url, "clearing session");

        let response = self.http.post(&url).send().await.map_err(map_reqwest_error)?;
        Self::check_status(response).await.map(|_| ())
    }

    async fn health(&self) -> Result<serde_json::Value, BackendError> {
        let url = self.config.endpoint("health");
        let response = self.http.get(&url).send().await.map_err(map_reqwest_error)?;
        Self::check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))
    }
}
