//! Drag gesture on the panel's header handle.
//!
//! A press on the handle starts the gesture, every pointer move yields a
//! new clamped position, and release ends it. The position is applied
//! incrementally so there is nothing to commit on release.

use chatdock_common::types::{Point, Viewport};

use crate::engine::{GeometryEngine, PanelGeometry};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragState {
    /// Pointer position when the gesture started.
    start_pointer: Point,
    /// Panel position when the gesture started.
    start_position: Point,
}

#[derive(Debug, Default)]
pub struct DragController {
    state: Option<DragState>,
}

// =============================================================================
// GESTURE
// =============================================================================

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    /// Whether the handle should accept a press. Fullscreen geometry is fixed.
    pub fn handle_enabled(geometry: &PanelGeometry) -> bool {
        !geometry.is_fullscreen
    }

    pub fn begin(&mut self, pointer: Point, geometry: &PanelGeometry) {
        self.state = Some(DragState {
            start_pointer: pointer,
            start_position: geometry.position,
        });
    }

    /// New geometry for the current pointer position, or `None` when no
    /// gesture is active. Clamps against the *current* size and viewport.
    pub fn update(
        &self,
        engine: &GeometryEngine,
        pointer: Point,
        geometry: &PanelGeometry,
        viewport: Viewport,
    ) -> Option<PanelGeometry> {
        let state = self.state?;
        if geometry.is_fullscreen {
            return Some(engine.enter_fullscreen(viewport, geometry.restore_size));
        }
        let moved = state.start_position.offset(
            pointer.x - state.start_pointer.x,
            pointer.y - state.start_pointer.y,
        );
        Some(PanelGeometry {
            position: engine.clamp_position(moved, geometry.size, viewport),
            ..*geometry
        })
    }

    pub fn end(&mut self) {
        self.state = None;
    }
}

// =============================================================================
// TESTS
// =============================================================================
