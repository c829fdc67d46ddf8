//! Geometry calculation: clamping, open placement and fullscreen.

use chatdock_common::types::{Point, Rect, Size, Viewport};

use super::types::{PanelGeometry, OPEN_GAP};
use super::GeometryEngine;

impl GeometryEngine {
    /// Keep the panel inside the padded viewport.
    ///
    /// When the panel is too large for the padded viewport the upper bound
    /// collapses onto `padding`, so coordinates never go negative.
    pub fn clamp_position(&self, pos: Point, size: Size, viewport: Viewport) -> Point {
        let max_x = (viewport.width - size.width - self.padding).max(self.padding);
        let max_y = (viewport.height - size.height - self.padding).max(self.padding);
        Point {
            x: pos.x.max(self.padding).min(max_x),
            y: pos.y.max(self.padding).min(max_y),
        }
    }

    /// Componentwise lower bound at `min_size`. No upper bound.
    pub fn clamp_size(&self, size: Size) -> Size {
        Size {
            width: size.width.max(self.min_size.width),
            height: size.height.max(self.min_size.height),
        }
    }

    /// Place the panel above and to the left of the launcher.
    ///
    /// The panel's right edge lines up with the anchor's right edge and its
    /// bottom sits `OPEN_GAP` above the anchor. Without an anchor the panel
    /// goes near the bottom-left corner.
    pub fn compute_open_position(
        &self,
        anchor: Option<Rect>,
        size: Size,
        viewport: Viewport,
    ) -> Point {
        let desired = match anchor {
            Some(rect) => Point::new(rect.right() - size.width, rect.y - size.height - OPEN_GAP),
            None => Point::new(100.0, viewport.height - size.height - 100.0),
        };
        self.clamp_position(desired, size, viewport)
    }

    /// Pin the panel to the padded viewport bounds.
    pub fn enter_fullscreen(&self, viewport: Viewport, restore_size: Size) -> PanelGeometry {
        PanelGeometry {
            position: Point::new(self.padding, self.padding),
            size: Size {
                width: (viewport.width - 2.0 * self.padding).max(0.0),
                height: (viewport.height - 2.0 * self.padding).max(0.0),
            },
            is_fullscreen: true,
            restore_size,
        }
    }

    /// Back to the remembered windowed size. The position is recomputed by
    /// clamping the fullscreen origin, not replayed from before.
    pub fn exit_fullscreen(&self, restore_size: Size, viewport: Viewport) -> PanelGeometry {
        let size = self.clamp_size(restore_size);
        let origin = Point::new(self.padding, self.padding);
        PanelGeometry::windowed(self.clamp_position(origin, size, viewport), size)
    }

    pub fn toggle_fullscreen(&self, geometry: &PanelGeometry, viewport: Viewport) -> PanelGeometry {
        if geometry.is_fullscreen {
            self.exit_fullscreen(geometry.restore_size, viewport)
        } else {
            self.enter_fullscreen(viewport, geometry.size)
        }
    }

    /// Geometry for an open transition. Recomputed from scratch: a
    /// fullscreen panel is re-pinned, a windowed one is placed next to
    /// the launcher with its size fitted to the viewport.
    pub fn open_geometry(
        &self,
        previous: Option<&PanelGeometry>,
        default_size: Size,
        anchor: Option<Rect>,
        viewport: Viewport,
    ) -> PanelGeometry {
        match previous {
            Some(g) if g.is_fullscreen => self.enter_fullscreen(viewport, g.restore_size),
            Some(g) => {
                let size = self.fit_size(g.size, viewport);
                PanelGeometry::windowed(self.compute_open_position(anchor, size, viewport), size)
            }
            None => {
                let size = self.fit_size(default_size, viewport);
                PanelGeometry::windowed(self.compute_open_position(anchor, size, viewport), size)
            }
        }
    }

    /// Re-apply the invariants after a viewport change so the panel
    /// cannot drift off-screen.
    pub fn fit_to_viewport(&self, geometry: &PanelGeometry, viewport: Viewport) -> PanelGeometry {
        if geometry.is_fullscreen {
            return self.enter_fullscreen(viewport, geometry.restore_size);
        }
        let size = self.fit_size(geometry.size, viewport);
        PanelGeometry::windowed(self.clamp_position(geometry.position, size, viewport), size)
    }

    /// Cap at the viewport, then enforce the minimum. The minimum wins on
    /// viewports smaller than `min_size`.
    pub(crate) fn fit_size(&self, size: Size, viewport: Viewport) -> Size {
        self.clamp_size(Size {
            width: size.width.min(viewport.width),
            height: size.height.min(viewport.height),
        })
    }
}
