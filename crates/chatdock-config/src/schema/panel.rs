//! Panel geometry configuration.

use chatdock_common::types::Size;
use chatdock_geometry::engine::{DEFAULT_PADDING, MIN_HEIGHT, MIN_WIDTH};
use chatdock_geometry::{GeometryEngine, ShellVariant};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub variant: ShellVariant,
    pub padding: f64,
    pub min_width: f64,
    pub min_height: f64,
    /// Overrides the variant's default windowed width when set.
    pub restore_width: Option<f64>,
    /// Overrides the variant's default windowed height when set.
    pub restore_height: Option<f64>,
    /// Open straight into fullscreen the first time.
    pub open_fullscreen: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            variant: ShellVariant::default(),
            padding: DEFAULT_PADDING,
            min_width: MIN_WIDTH,
            min_height: MIN_HEIGHT,
            restore_width: None,
            restore_height: None,
            open_fullscreen: false,
        }
    }
}

impl PanelConfig {
    pub fn engine(&self) -> GeometryEngine {
        GeometryEngine::new(self.padding, Size::new(self.min_width, self.min_height))
    }

    /// Windowed size used before the user has resized anything.
    pub fn default_size(&self) -> Size {
        let base = self.variant.default_size();
        Size::new(
            self.restore_width.unwrap_or(base.width),
            self.restore_height.unwrap_or(base.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_engine_matches_geometry_defaults() {
        assert_eq!(PanelConfig::default().engine(), GeometryEngine::default());
    }

    #[test]
    fn default_size_follows_variant() {
        let mut config = PanelConfig::default();
        assert_eq!(config.default_size(), Size::new(500.0, 400.0));
        config.variant = ShellVariant::Compact;
        assert_eq!(config.default_size(), Size::new(400.0, 300.0));
    }

    #[test]
    fn restore_override_replaces_one_axis() {
        let config = PanelConfig {
            restore_width: Some(640.0),
            ..PanelConfig::default()
        };
        assert_eq!(config.default_size(), Size::new(640.0, 400.0));
    }
}
