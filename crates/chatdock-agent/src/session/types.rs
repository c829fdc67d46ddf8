//! Session values handed between the store, the conversation controller
//! and whoever drives the backend calls.

use std::sync::Arc;

use chatdock_common::RequestId;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{AskRequest, BackendError, ChatBackend};

/// Bot text recorded when an ask fails for any reason.
pub const ERROR_SENTINEL: &str = "⚠️ Error getting response.";

/// The greeting a profile's thread starts with.
pub fn greeting(title: &str) -> String {
    format!("Hello! 👋 I'm the {title} agent. How can I help you today?")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub is_user: bool,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: true,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: false,
        }
    }
}

/// Backend notification owed after a profile switch.
///
/// The switch itself is already committed when this is produced; the
/// notification outcome never reverts it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "the backend must be told about the switch"]
pub struct ProfileSwitch {
    pub title: String,
}

impl ProfileSwitch {
    /// Fire the notification. Failures are logged, never returned.
    pub async fn notify(self, backend: &dyn ChatBackend) {
        match backend.switch_profile(&self.title).await {
            Ok(()) => info!(profile = %self.title, "backend switched profile"),
            Err(e) => warn!(profile = %self.title, error = %e, "failed to switch profile"),
        }
    }
}

/// An ask request in flight.
///
/// Captures the profile that was active at send time, so the answer lands
/// in that thread even if the user switched since. Consumed by
/// [`ConversationController::finish`](super::ConversationController::finish),
/// which makes the busy-flag release happen exactly once.
#[derive(Debug)]
#[must_use = "a pending ask must be finished or the widget stays busy"]
pub struct PendingAsk {
    pub id: RequestId,
    pub profile: String,
    pub request: AskRequest,
}

impl PendingAsk {
    /// Run the ask on its own task. A backend that panics settles as a
    /// network failure, so the caller still gets a result to finish with.
    pub async fn dispatch(&self, backend: Arc<dyn ChatBackend>) -> Result<String, BackendError> {
        let request = self.request.clone();
        match tokio::spawn(async move { backend.ask(&request).await }).await {
            Ok(result) => result,
            Err(e) => {
                warn!(id = %self.id, error = %e, "ask task aborted");
                Err(BackendError::Network(format!("ask task aborted: {e}")))
            }
        }
    }
}
