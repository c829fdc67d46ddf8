//! Input buffer and message submission.

use super::core::WidgetShell;

impl WidgetShell {
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the input buffer with what the user typed.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Toggle a policy tag in the input buffer. Returns whether the tag is
    /// present afterwards.
    pub fn toggle_policy(&mut self, key: &str) -> bool {
        self.conversation.policies().toggle(&mut self.input, key)
    }

    /// Enter key or send button. Ignored while blank, busy or without an
    /// active profile.
    pub fn submit(&mut self) {
        if let Some(pending) = self.conversation.send(&mut self.store, &mut self.input) {
            self.spawn_ask(pending);
        }
    }

    /// Whether the "thinking" indicator should show.
    pub fn is_thinking(&self) -> bool {
        self.store.is_awaiting_response()
    }
}
