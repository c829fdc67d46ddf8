//! Configuration schema types for Chatdock.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod backend;
mod host;
mod panel;
mod policies;
mod system;

pub use backend::*;
pub use host::*;
pub use panel::*;
pub use policies::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration. Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ChatdockConfig {
    pub backend: BackendConfig,
    pub panel: PanelConfig,
    pub host: HostConfig,
    pub policies: PoliciesConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
