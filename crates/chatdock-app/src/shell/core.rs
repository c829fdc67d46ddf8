//! WidgetShell struct definition and constructor.

use std::sync::Arc;

use tokio::sync::mpsc;

use chatdock_agent::{ChatBackend, ConversationController, PolicyCatalog, ProfileSessionStore};
use chatdock_common::{EventBus, Rect, Size, Viewport};
use chatdock_config::schema::{ChatdockConfig, LauncherConfig};
use chatdock_geometry::{DragController, GeometryEngine, PanelGeometry, ResizeController};

use super::types::Completion;

/// The chat widget: a launcher button and the floating panel it opens.
///
/// Owns every piece of widget state. All methods run on one loop; backend
/// calls are spawned and come back as [`Completion`]s through
/// [`apply_completion`](Self::apply_completion).
pub struct WidgetShell {
    // Panel chrome
    pub(super) is_open: bool,
    pub(super) is_info_popup_open: bool,
    pub(super) is_profile_dropdown_open: bool,

    // Geometry
    pub(super) engine: GeometryEngine,
    pub(super) default_size: Size,
    pub(super) open_fullscreen: bool,
    /// Created on first open, kept across close/reopen.
    pub(super) geometry: Option<PanelGeometry>,
    pub(super) viewport: Viewport,
    pub(super) launcher: LauncherConfig,
    pub(super) launcher_rect: Rect,
    pub(super) drag: DragController,
    pub(super) resize: ResizeController,

    // Conversation
    pub(super) input: String,
    pub(super) store: ProfileSessionStore,
    pub(super) conversation: ConversationController,

    // Backend plumbing
    pub(super) backend: Arc<dyn ChatBackend>,
    pub(super) completions: mpsc::UnboundedSender<Completion>,
    pub(super) in_flight: usize,

    pub(super) events: EventBus,
}

impl WidgetShell {
    pub fn new(
        config: &ChatdockConfig,
        backend: Arc<dyn ChatBackend>,
        completions: mpsc::UnboundedSender<Completion>,
    ) -> Self {
        let events = EventBus::default();
        let viewport = config.host.viewport();
        let launcher = config.host.launcher.clone();
        let launcher_rect = launcher.rect(viewport);
        Self {
            is_open: false,
            is_info_popup_open: false,
            is_profile_dropdown_open: false,
            engine: config.panel.engine(),
            default_size: config.panel.default_size(),
            open_fullscreen: config.panel.open_fullscreen,
            geometry: None,
            viewport,
            launcher,
            launcher_rect,
            drag: DragController::new(),
            resize: ResizeController::new(),
            input: String::new(),
            store: ProfileSessionStore::new(events.clone()),
            conversation: ConversationController::new(PolicyCatalog::new(
                config.policies.keys.iter().cloned(),
            )),
            backend,
            completions,
            in_flight: 0,
            events,
        }
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn store(&self) -> &ProfileSessionStore {
        &self.store
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_info_popup_open(&self) -> bool {
        self.is_info_popup_open
    }

    pub fn is_profile_dropdown_open(&self) -> bool {
        self.is_profile_dropdown_open
    }

    pub fn geometry(&self) -> Option<&PanelGeometry> {
        self.geometry.as_ref()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn launcher_rect(&self) -> Rect {
        self.launcher_rect
    }

    /// Backend calls spawned but not yet applied.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}
