//! Geometry engine types and configuration.

use chatdock_common::types::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

pub const MIN_WIDTH: f64 = 300.0;
pub const MIN_HEIGHT: f64 = 200.0;
pub const DEFAULT_PADDING: f64 = 20.0;
/// Vertical gap between the launcher's top edge and the opened panel.
pub const OPEN_GAP: f64 = 10.0;

/// Which page shell hosts the widget. Only the default size differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShellVariant {
    /// Single-thread assistant without profiles.
    Compact,
    /// Multi-profile assistant.
    #[default]
    Profiles,
}

impl ShellVariant {
    pub fn default_size(self) -> Size {
        match self {
            ShellVariant::Compact => Size::new(400.0, 300.0),
            ShellVariant::Profiles => Size::new(500.0, 400.0),
        }
    }
}

/// Position, size and mode of the floating panel.
///
/// `restore_size` is the windowed size to return to when leaving
/// fullscreen. Outside fullscreen it tracks `size`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelGeometry {
    pub position: Point,
    pub size: Size,
    pub is_fullscreen: bool,
    pub restore_size: Size,
}

impl PanelGeometry {
    pub fn windowed(position: Point, size: Size) -> Self {
        Self {
            position,
            size,
            is_fullscreen: false,
            restore_size: size,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_parts(self.position, self.size)
    }
}

/// Stateless geometry rules. Callers persist the returned geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryEngine {
    /// Margin kept between the panel and the viewport edges.
    pub padding: f64,
    /// Smallest size a resize may produce.
    pub min_size: Size,
}

impl Default for GeometryEngine {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            min_size: Size::new(MIN_WIDTH, MIN_HEIGHT),
        }
    }
}

impl GeometryEngine {
    pub fn new(padding: f64, min_size: Size) -> Self {
        Self { padding, min_size }
    }
}
