//! Internal types and constants for the shell module.

use chatdock_agent::{AgentProfile, BackendError, PendingAsk};
use chatdock_common::{Point, Size};

/// Results of backend calls, delivered back to the loop that owns the
/// shell.
#[derive(Debug)]
pub enum Completion {
    /// The initial profile fetch settled.
    ProfilesFetched(Result<Vec<AgentProfile>, BackendError>),
    /// The backend was told about a switch. Failures were already logged.
    SwitchNotified { title: String },
    /// An ask settled.
    Answered {
        pending: PendingAsk,
        result: Result<String, BackendError>,
    },
    /// The mount-time session clear settled.
    SessionCleared(Result<(), BackendError>),
}

/// Info popup placement relative to the panel's top-left corner.
pub(super) const INFO_POPUP_OFFSET: Point = Point::new(16.0, 64.0);

/// Info popup box. Narrowed to the panel when the panel is smaller.
pub(super) const INFO_POPUP_SIZE: Size = Size::new(384.0, 120.0);
