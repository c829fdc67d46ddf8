//! The widget shell.
//!
//! Composes geometry, gestures, the profile session store and the
//! conversation controller into the launcher-plus-panel widget. The
//! shell is driven by host events and backend completions, and reports
//! every visible change on its event bus.

mod conversation;
mod core;
mod gestures;
mod overlays;
mod panel;
mod tasks;
mod types;


pub use self::core::WidgetShell;
pub use types::Completion;
