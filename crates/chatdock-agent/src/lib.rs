//! Conversation engine for the chat widget.
//!
//! Provides:
//! - the [`ChatBackend`] collaborator interface and its reqwest implementation
//! - a per-profile session store with lazy greeting seeds
//! - the send/await/record conversation state machine
//! - policy tag extraction for queries

pub mod backend;
pub mod policy;
pub mod session;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

pub use backend::{HttpBackend, HttpBackendConfig};
pub use policy::PolicyCatalog;
pub use session::{
    ChatMessage, ConversationController, PendingAsk, ProfileSessionStore, ProfileSwitch,
    ERROR_SENTINEL,
};

/// The remote conversational backend.
///
/// All calls are credentialed: implementations keep whatever session state
/// (cookies) binds them to a server-side session.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn list_profiles(&self) -> Result<Vec<AgentProfile>, BackendError>;

    /// Tell the backend which profile subsequent queries target.
    async fn switch_profile(&self, title: &str) -> Result<(), BackendError>;

    /// Answer a query. Returns the display text.
    async fn ask(&self, request: &AskRequest) -> Result<String, BackendError>;

    /// Drop the server-side session.
    async fn clear_session(&self) -> Result<(), BackendError>;

    async fn health(&self) -> Result<serde_json::Value, BackendError>;
}

/// A selectable agent persona. Identity is the title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentProfile {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl AgentProfile {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            icon: None,
        }
    }
}

impl PartialEq for AgentProfile {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
    }
}

impl Eq for AgentProfile {}

impl Hash for AgentProfile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
    }
}

/// Body of `POST /ask`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub query: String,
    #[serde(
        rename = "policyKeys",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub policy_keys: Vec<String>,
}

impl AskRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            policy_keys: Vec::new(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Timeout")]
    Timeout,
}
