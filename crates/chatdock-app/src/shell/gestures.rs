//! Pointer gestures on the panel: header drag and corner resize.
//!
//! The host reports press, move and release on the two handles. Each move
//! is applied immediately; releasing only ends the gesture.

use tracing::debug;

use chatdock_common::Point;
use chatdock_geometry::DragController;

use super::core::WidgetShell;

impl WidgetShell {
    /// Press on the header handle. Returns whether a drag started.
    pub fn begin_drag(&mut self, pointer: Point) -> bool {
        let Some(geometry) = self.geometry.filter(|_| self.is_open) else {
            return false;
        };
        if !DragController::handle_enabled(&geometry) {
            debug!("drag handle disabled in fullscreen");
            return false;
        }
        self.drag.begin(pointer, &geometry);
        true
    }

    pub fn update_drag(&mut self, pointer: Point) {
        let Some(geometry) = self.geometry else {
            return;
        };
        if let Some(next) = self.drag.update(&self.engine, pointer, &geometry, self.viewport) {
            self.set_geometry(next);
        }
    }

    pub fn end_drag(&mut self) {
        self.drag.end();
    }

    /// Press on the bottom-right handle. Returns whether a resize started.
    pub fn begin_resize(&mut self, pointer: Point) -> bool {
        let Some(geometry) = self.geometry.filter(|_| self.is_open) else {
            return false;
        };
        self.resize.begin(pointer, &geometry)
    }

    pub fn update_resize(&mut self, pointer: Point) {
        let Some(geometry) = self.geometry else {
            return;
        };
        if let Some(next) = self.resize.update(&self.engine, pointer, &geometry, self.viewport) {
            self.set_geometry(next);
        }
    }

    pub fn end_resize(&mut self) {
        self.resize.end();
    }

    pub fn is_gesture_active(&self) -> bool {
        self.drag.is_active() || self.resize.is_active()
    }
}
