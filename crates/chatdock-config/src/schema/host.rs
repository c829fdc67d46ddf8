//! Host page configuration: initial viewport and launcher placement.

use chatdock_common::types::{Rect, Viewport};
use serde::{Deserialize, Serialize};

/// The launcher button is pinned to the bottom-right corner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Square button edge in pixels.
    pub size: f64,
    /// Distance from the right and bottom viewport edges.
    pub margin: f64,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            size: 48.0,
            margin: 24.0,
        }
    }
}

impl LauncherConfig {
    pub fn rect(&self, viewport: Viewport) -> Rect {
        Rect {
            x: viewport.width - self.margin - self.size,
            y: viewport.height - self.margin - self.size,
            width: self.size,
            height: self.size,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub launcher: LauncherConfig,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280.0,
            viewport_height: 800.0,
            launcher: LauncherConfig::default(),
        }
    }
}

impl HostConfig {
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport_width, self.viewport_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launcher_sits_in_bottom_right_corner() {
        let host = HostConfig::default();
        let rect = host.launcher.rect(host.viewport());
        assert_eq!(rect.x, 1208.0);
        assert_eq!(rect.y, 728.0);
        assert_eq!(rect.right(), 1256.0);
    }
}
