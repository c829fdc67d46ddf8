//! Per-profile conversation threads.

use std::collections::HashMap;

use chatdock_common::{EventBus, StateEvent};
use tracing::{debug, info, warn};

use crate::{AgentProfile, BackendError};

use super::types::{greeting, ChatMessage, ProfileSwitch};

/// Owns the available profiles, which one is active, and one ordered
/// history per profile title.
///
/// Histories are created lazily with a single greeting the first time a
/// profile becomes active and are never re-seeded. Switching only changes
/// which key is read and written.
pub struct ProfileSessionStore {
    profiles: Vec<AgentProfile>,
    active: Option<AgentProfile>,
    history: HashMap<String, Vec<ChatMessage>>,
    awaiting_response: bool,
    events: EventBus,
}

impl ProfileSessionStore {
    pub fn new(events: EventBus) -> Self {
        Self {
            profiles: Vec::new(),
            active: None,
            history: HashMap::new(),
            awaiting_response: false,
            events,
        }
    }

    /// Completion of the profile fetch.
    ///
    /// A non-empty list selects the first profile and performs the full
    /// switch even though nothing was selected before, so the backend
    /// agrees with the UI from the first render. Failure leaves the store
    /// empty and the widget degraded but usable.
    pub fn apply_profiles(
        &mut self,
        result: Result<Vec<AgentProfile>, BackendError>,
    ) -> Option<ProfileSwitch> {
        let profiles = match result {
            Ok(p) if !p.is_empty() => p,
            Ok(_) => {
                warn!("backend returned no profiles");
                self.events.publish(StateEvent::ProfilesUnavailable {
                    reason: "no profiles".into(),
                });
                return None;
            }
            Err(e) => {
                warn!(error = %e, "failed to fetch profiles");
                self.events.publish(StateEvent::ProfilesUnavailable {
                    reason: e.to_string(),
                });
                return None;
            }
        };

        info!(count = profiles.len(), "profiles loaded");
        let first = profiles[0].clone();
        self.profiles = profiles;
        self.events.publish(StateEvent::ProfilesLoaded {
            count: self.profiles.len(),
        });
        Some(self.activate(first))
    }

    /// Make `target` the active profile. No-op if it already is.
    pub fn switch_profile(&mut self, target: &AgentProfile) -> Option<ProfileSwitch> {
        if self.active.as_ref() == Some(target) {
            debug!(profile = %target.title, "already active");
            return None;
        }
        Some(self.activate(target.clone()))
    }

    /// Switch by title. Unknown titles are ignored.
    pub fn select(&mut self, title: &str) -> Option<ProfileSwitch> {
        let target = self.find_profile(title)?.clone();
        self.switch_profile(&target)
    }

    fn activate(&mut self, target: AgentProfile) -> ProfileSwitch {
        let title = target.title.clone();
        self.active = Some(target);
        self.events.publish(StateEvent::ProfileSwitched {
            title: title.clone(),
        });

        if !self.history.contains_key(&title) {
            self.history
                .insert(title.clone(), vec![ChatMessage::bot(greeting(&title))]);
            self.events.publish(StateEvent::HistorySeeded {
                profile: title.clone(),
            });
        }

        ProfileSwitch { title }
    }

    /// Append to a profile's thread, creating it if absent.
    pub fn append_message(&mut self, profile: &str, message: ChatMessage) {
        let is_user = message.is_user;
        self.history
            .entry(profile.to_string())
            .or_default()
            .push(message);
        self.events.publish(StateEvent::MessageAppended {
            profile: profile.to_string(),
            is_user,
        });
    }

    pub(crate) fn set_awaiting_response(&mut self, awaiting: bool) {
        if self.awaiting_response != awaiting {
            self.awaiting_response = awaiting;
            self.events.publish(StateEvent::AwaitingChanged(awaiting));
        }
    }

    pub fn profiles(&self) -> &[AgentProfile] {
        &self.profiles
    }

    pub fn find_profile(&self, title: &str) -> Option<&AgentProfile> {
        self.profiles.iter().find(|p| p.title == title)
    }

    pub fn active_profile(&self) -> Option<&AgentProfile> {
        self.active.as_ref()
    }

    pub fn history(&self, title: &str) -> &[ChatMessage] {
        self.history.get(title).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn active_history(&self) -> &[ChatMessage] {
        match &self.active {
            Some(p) => self.history(&p.title),
            None => &[],
        }
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.awaiting_response
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }
}
