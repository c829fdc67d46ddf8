//! Conversation sessions.
//!
//! One history per agent profile, a busy flag shared across profiles, and
//! the controller that moves a question through them.

mod conversation;
mod store;
mod types;

pub use conversation::ConversationController;
pub use store::ProfileSessionStore;
pub use types::{greeting, ChatMessage, PendingAsk, ProfileSwitch, ERROR_SENTINEL};
