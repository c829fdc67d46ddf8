//! The send / await / record state machine.

use chatdock_common::RequestId;
use tracing::{debug, info, warn};

use crate::{AskRequest, BackendError, PolicyCatalog};

use super::store::ProfileSessionStore;
use super::types::{ChatMessage, PendingAsk, ERROR_SENTINEL};

/// Drives one question at a time through the active profile's thread.
///
/// The controller holds no conversation state of its own; everything lives
/// in the [`ProfileSessionStore`] it is handed. The backend call itself is
/// performed by the caller with [`PendingAsk::dispatch`] and the outcome is
/// fed back through [`finish`](Self::finish).
#[derive(Debug, Clone, Default)]
pub struct ConversationController {
    policies: PolicyCatalog,
}

impl ConversationController {
    pub fn new(policies: PolicyCatalog) -> Self {
        Self { policies }
    }

    pub fn policies(&self) -> &PolicyCatalog {
        &self.policies
    }

    /// Submit the input buffer.
    ///
    /// Returns `None` without touching anything when the input is blank, a
    /// response is still outstanding, or no profile is active. On success
    /// the user message is already in the thread, the buffer is empty and
    /// the store is busy.
    pub fn send(
        &self,
        store: &mut ProfileSessionStore,
        input: &mut String,
    ) -> Option<PendingAsk> {
        if input.trim().is_empty() {
            return None;
        }
        if store.is_awaiting_response() {
            debug!("send ignored, response outstanding");
            return None;
        }
        let Some(profile) = store.active_profile().map(|p| p.title.clone()) else {
            debug!("send ignored, no active profile");
            return None;
        };

        let text = std::mem::take(input);
        store.append_message(&profile, ChatMessage::user(text.clone()));
        store.set_awaiting_response(true);

        let mut request = AskRequest::new(text.clone());
        request.policy_keys = self.policies.extract(&text);

        let id = RequestId::new();
        info!(%id, profile = %profile, policy_keys = request.policy_keys.len(), "question sent");
        Some(PendingAsk {
            id,
            profile,
            request,
        })
    }

    /// Record the outcome of `pending` in the thread it was sent from and
    /// release the busy flag.
    pub fn finish(
        &self,
        store: &mut ProfileSessionStore,
        pending: PendingAsk,
        result: Result<String, BackendError>,
    ) {
        let text = match result {
            Ok(text) => {
                info!(id = %pending.id, profile = %pending.profile, "answer received");
                text
            }
            Err(e) => {
                warn!(id = %pending.id, profile = %pending.profile, error = %e, "ask failed");
                ERROR_SENTINEL.to_string()
            }
        };
        store.append_message(&pending.profile, ChatMessage::bot(text));
        store.set_awaiting_response(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AgentProfile;
    use chatdock_common::EventBus;

    fn setup() -> (ConversationController, ProfileSessionStore) {
        let mut store = ProfileSessionStore::new(EventBus::default());
        let _ = store.apply_profiles(Ok(vec![
            AgentProfile::new("HR", "People"),
            AgentProfile::new("IT", "Devices"),
        ]));
        let controller = ConversationController::new(PolicyCatalog::new(["@leave"]));
        (controller, store)
    }

    #[test]
    fn send_then_answer() {
        let (controller, mut store) = setup();
        let mut input = String::from("hello");

        let pending = controller.send(&mut store, &mut input).unwrap();
        assert!(input.is_empty());
        assert!(store.is_awaiting_response());
        assert_eq!(pending.profile, "HR");
        assert_eq!(pending.request.query, "hello");
        assert_eq!(store.history("HR").last(), Some(&ChatMessage::user("hello")));

        controller.finish(&mut store, pending, Ok("Hi there".into()));
        assert!(!store.is_awaiting_response());
        let hr = store.history("HR");
        assert_eq!(hr.len(), 3);
        assert_eq!(hr[2], ChatMessage::bot("Hi there"));
    }

    #[test]
    fn failure_records_sentinel_and_releases() {
        let (controller, mut store) = setup();
        let mut input = String::from("hello");
        let pending = controller.send(&mut store, &mut input).unwrap();

        controller.finish(&mut store, pending, Err(BackendError::Timeout));
        assert!(!store.is_awaiting_response());
        assert_eq!(
            store.history("HR").last(),
            Some(&ChatMessage::bot(ERROR_SENTINEL))
        );
    }

    #[test]
    fn blank_input_is_ignored() {
        let (controller, mut store) = setup();
        let mut input = String::from("   \n");
        assert!(controller.send(&mut store, &mut input).is_none());
        assert_eq!(input, "   \n");
        assert_eq!(store.history("HR").len(), 1);
        assert!(!store.is_awaiting_response());
    }

    #[test]
    fn second_send_while_busy_is_ignored() {
        let (controller, mut store) = setup();
        let mut input = String::from("first");
        let pending = controller.send(&mut store, &mut input).unwrap();

        input.push_str("second");
        assert!(controller.send(&mut store, &mut input).is_none());
        assert_eq!(input, "second");
        assert_eq!(store.history("HR").len(), 2);

        controller.finish(&mut store, pending, Ok("ok".into()));
        assert!(controller.send(&mut store, &mut input).is_some());
    }

    #[test]
    fn late_answer_lands_in_sending_profile() {
        let (controller, mut store) = setup();
        let mut input = String::from("question for HR");
        let pending = controller.send(&mut store, &mut input).unwrap();

        let _ = store.select("IT");
        controller.finish(&mut store, pending, Ok("HR answer".into()));

        assert_eq!(store.history("HR").last(), Some(&ChatMessage::bot("HR answer")));
        assert_eq!(store.history("IT").len(), 1);
        assert_eq!(store.active_profile().unwrap().title, "IT");
    }

    #[test]
    fn no_active_profile_is_ignored() {
        let controller = ConversationController::default();
        let mut store = ProfileSessionStore::new(EventBus::default());
        let mut input = String::from("hello");
        assert!(controller.send(&mut store, &mut input).is_none());
        assert_eq!(input, "hello");
        assert!(!store.is_awaiting_response());
    }

    #[test]
    fn known_policy_tags_are_forwarded() {
        let (controller, mut store) = setup();
        let mut input = String::from("how much @leave and @parking");
        let pending = controller.send(&mut store, &mut input).unwrap();
        assert_eq!(pending.request.policy_keys, vec!["@leave"]);
        assert_eq!(pending.request.query, "how much @leave and @parking");
        controller.finish(&mut store, pending, Ok(String::new()));
    }
}
