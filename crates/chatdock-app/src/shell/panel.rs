//! Open, close, fullscreen and viewport handling for the panel.

use tracing::{debug, info};

use chatdock_common::{StateEvent, Viewport};
use chatdock_geometry::PanelGeometry;

use super::core::WidgetShell;

impl WidgetShell {
    /// Launcher click: opens a closed panel, closes an open one.
    pub fn toggle_launcher(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Open the panel. Geometry is recomputed on every open: next to the
    /// launcher when windowed, re-pinned when fullscreen.
    pub fn open(&mut self) {
        if self.is_open {
            return;
        }
        let first_open = self.geometry.is_none();
        let mut geometry = self.engine.open_geometry(
            self.geometry.as_ref(),
            self.default_size,
            Some(self.launcher_rect),
            self.viewport,
        );
        if first_open && self.open_fullscreen {
            geometry = self.engine.enter_fullscreen(self.viewport, geometry.size);
        }

        self.is_open = true;
        info!(rect = ?geometry.rect(), fullscreen = geometry.is_fullscreen, "panel opened");
        self.events.publish(StateEvent::PanelOpened);
        self.set_geometry(geometry);
    }

    /// Close the panel. Geometry is kept for the next open. The info popup
    /// and dropdown live inside the panel and are dismissed with it.
    pub fn close(&mut self) {
        if !self.is_open {
            return;
        }
        self.drag.end();
        self.resize.end();
        self.set_info_popup(false);
        self.set_dropdown(false);
        self.is_open = false;
        info!("panel closed");
        self.events.publish(StateEvent::PanelClosed);
    }

    /// Enter or leave fullscreen. Works whether or not the panel is
    /// showing; ignored before the first open since there is no geometry.
    pub fn toggle_fullscreen(&mut self) {
        let Some(current) = self.geometry else {
            debug!("fullscreen toggle ignored, panel never opened");
            return;
        };
        self.drag.end();
        self.resize.end();
        let next = self.engine.toggle_fullscreen(&current, self.viewport);
        self.set_geometry(next);
    }

    /// Host window resize. Re-anchors the launcher and pulls the panel
    /// back inside the new bounds.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        debug!(width = viewport.width, height = viewport.height, "viewport changed");
        self.viewport = viewport;
        self.launcher_rect = self.launcher.rect(viewport);
        if let Some(current) = self.geometry {
            let fitted = self.engine.fit_to_viewport(&current, viewport);
            self.set_geometry(fitted);
        }
    }

    pub fn is_fullscreen(&self) -> bool {
        self.geometry.is_some_and(|g| g.is_fullscreen)
    }

    pub(super) fn set_geometry(&mut self, geometry: PanelGeometry) {
        if self.geometry == Some(geometry) {
            return;
        }
        self.geometry = Some(geometry);
        self.events.publish(StateEvent::GeometryChanged {
            rect: geometry.rect(),
            fullscreen: geometry.is_fullscreen,
        });
    }
}
