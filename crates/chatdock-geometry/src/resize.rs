//! Resize gesture from the bottom-right corner handle.
//!
//! The top-left corner stays anchored. The handle is hidden while the
//! panel is fullscreen, so the controller refuses to start there.

use chatdock_common::types::{Point, Size, Viewport};

use crate::engine::{GeometryEngine, PanelGeometry};

#[derive(Debug, Clone, Copy, PartialEq)]
struct ResizeState {
    start_pointer: Point,
    start_size: Size,
}

#[derive(Debug, Default)]
pub struct ResizeController {
    state: Option<ResizeState>,
}

impl ResizeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    /// Start a gesture. Returns `false` (and stays idle) in fullscreen.
    pub fn begin(&mut self, pointer: Point, geometry: &PanelGeometry) -> bool {
        if geometry.is_fullscreen {
            return false;
        }
        self.state = Some(ResizeState {
            start_pointer: pointer,
            start_size: geometry.size,
        });
        true
    }

    /// New geometry for the current pointer position.
    ///
    /// Size is `start + delta`, floored at the engine minimum on every move
    /// and capped at the viewport. The minimum wins if the viewport is
    /// smaller than it.
    pub fn update(
        &self,
        engine: &GeometryEngine,
        pointer: Point,
        geometry: &PanelGeometry,
        viewport: Viewport,
    ) -> Option<PanelGeometry> {
        let state = self.state?;
        if geometry.is_fullscreen {
            return None;
        }
        let requested = Size::new(
            state.start_size.width + (pointer.x - state.start_pointer.x),
            state.start_size.height + (pointer.y - state.start_pointer.y),
        );
        let capped = Size::new(
            requested.width.min(viewport.width),
            requested.height.min(viewport.height),
        );
        Some(PanelGeometry::windowed(
            geometry.position,
            engine.clamp_size(capped),
        ))
    }

    pub fn end(&mut self) {
        self.state = None;
    }
}
