//! Backend calls spawned off the loop and their completions.
//!
//! Every call runs as its own task and reports back through the shell's
//! completion channel. Nothing here touches widget state directly; the
//! owning loop applies each [`Completion`] in arrival order.

use tracing::{debug, info, warn};

use chatdock_agent::{PendingAsk, ProfileSwitch};
use chatdock_common::StateEvent;

use super::core::WidgetShell;
use super::types::Completion;

impl WidgetShell {
    /// Widget mount: drop any stale server session and fetch profiles.
    pub fn mount(&mut self) {
        info!("widget mounted");
        self.spawn_clear_session();
        self.spawn_profile_fetch();
    }

    /// Apply one settled backend call to the widget state.
    pub fn apply_completion(&mut self, completion: Completion) {
        self.in_flight = self.in_flight.saturating_sub(1);
        match completion {
            Completion::ProfilesFetched(result) => {
                if let Some(switch) = self.store.apply_profiles(result) {
                    self.spawn_switch_notify(switch);
                }
            }
            Completion::SwitchNotified { title } => {
                debug!(profile = %title, "switch notification settled");
            }
            Completion::Answered { pending, result } => {
                self.conversation.finish(&mut self.store, pending, result);
            }
            Completion::SessionCleared(Ok(())) => {
                info!("server session cleared");
                self.events.publish(StateEvent::SessionCleared);
            }
            Completion::SessionCleared(Err(e)) => {
                warn!(error = %e, "failed to clear server session");
            }
        }
    }

    fn spawn_clear_session(&mut self) {
        let backend = self.backend.clone();
        let tx = self.completions.clone();
        self.in_flight += 1;
        tokio::spawn(async move {
            let result = backend.clear_session().await;
            let _ = tx.send(Completion::SessionCleared(result));
        });
    }

    fn spawn_profile_fetch(&mut self) {
        let backend = self.backend.clone();
        let tx = self.completions.clone();
        self.in_flight += 1;
        tokio::spawn(async move {
            let result = backend.list_profiles().await;
            let _ = tx.send(Completion::ProfilesFetched(result));
        });
    }

    pub(super) fn spawn_switch_notify(&mut self, switch: ProfileSwitch) {
        let backend = self.backend.clone();
        let tx = self.completions.clone();
        self.in_flight += 1;
        tokio::spawn(async move {
            let title = switch.title.clone();
            switch.notify(backend.as_ref()).await;
            let _ = tx.send(Completion::SwitchNotified { title });
        });
    }

    pub(super) fn spawn_ask(&mut self, pending: PendingAsk) {
        let backend = self.backend.clone();
        let tx = self.completions.clone();
        self.in_flight += 1;
        tokio::spawn(async move {
            let result = pending.dispatch(backend).await;
            let _ = tx.send(Completion::Answered { pending, result });
        });
    }
}
