//! Observable state changes.
//!
//! Every component that mutates widget state publishes a [`StateEvent`]
//! on the [`EventBus`]. Renderers subscribe instead of relying on hidden
//! re-render triggers.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::Rect;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum StateEvent {
    ProfilesLoaded { count: usize },
    ProfilesUnavailable { reason: String },
    ProfileSwitched { title: String },
    HistorySeeded { profile: String },
    MessageAppended { profile: String, is_user: bool },
    AwaitingChanged(bool),
    PanelOpened,
    PanelClosed,
    GeometryChanged { rect: Rect, fullscreen: bool },
    InfoPopupChanged(bool),
    DropdownChanged(bool),
    SessionCleared,
    #[serde(other)]
    Unknown,
}

#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<StateEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StateEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: StateEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(256)
    }
}
