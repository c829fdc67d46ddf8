//! Apply host commands to the shell.

use chatdock_common::{Point, Viewport};

use crate::shell::WidgetShell;

use super::command::{HostCommand, HELP};
use super::render;

/// Inset from the panel's top-left corner where drag presses land.
const HEADER_GRIP: f64 = 10.0;

/// Run one command. Returns text to print, if any. `Quit` is handled by
/// the caller.
pub fn dispatch(shell: &mut WidgetShell, command: HostCommand) -> Option<String> {
    match command {
        HostCommand::Open => shell.toggle_launcher(),
        HostCommand::Close => shell.close(),
        HostCommand::Fullscreen => shell.toggle_fullscreen(),
        HostCommand::Viewport { width, height } => {
            shell.set_viewport(Viewport::new(width, height));
        }
        HostCommand::Drag { dx, dy } => {
            let rect = shell.geometry()?.rect();
            let start = Point::new(rect.x + HEADER_GRIP, rect.y + HEADER_GRIP);
            if !shell.begin_drag(start) {
                return Some("drag ignored".into());
            }
            shell.update_drag(start.offset(dx, dy));
            shell.end_drag();
        }
        HostCommand::Resize { dx, dy } => {
            let rect = shell.geometry()?.rect();
            let start = Point::new(rect.right(), rect.bottom());
            if !shell.begin_resize(start) {
                return Some("resize ignored".into());
            }
            shell.update_resize(start.offset(dx, dy));
            shell.end_resize();
        }
        HostCommand::Type(text) => shell.set_input(text),
        HostCommand::Send => shell.submit(),
        HostCommand::Profiles => return Some(render::profile_list(shell)),
        HostCommand::Select(title) => shell.select_profile(&title),
        HostCommand::Dropdown => shell.toggle_dropdown(),
        HostCommand::Info => {
            if shell.is_info_popup_open() {
                shell.close_info_popup();
            } else {
                shell.open_info_popup();
            }
        }
        HostCommand::Click { x, y } => shell.pointer_down(Point::new(x, y)),
        HostCommand::Policy(key) => {
            shell.toggle_policy(&key);
            return Some(format!("input: {}", shell.input()));
        }
        HostCommand::Show => return Some(render::describe(shell)),
        HostCommand::Help => return Some(HELP.to_string()),
        HostCommand::Quit => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use chatdock_agent::{AgentProfile, AskRequest, BackendError, ChatBackend};
    use chatdock_common::Size;
    use chatdock_config::ChatdockConfig;
    use tokio::sync::mpsc;

    use super::*;

    struct Offline;

    #[async_trait]
    impl ChatBackend for Offline {
        async fn list_profiles(&self) -> Result<Vec<AgentProfile>, BackendError> {
            Err(BackendError::Network("offline".into()))
        }
        async fn switch_profile(&self, _title: &str) -> Result<(), BackendError> {
            Err(BackendError::Network("offline".into()))
        }
        async fn ask(&self, _request: &AskRequest) -> Result<String, BackendError> {
            Err(BackendError::Network("offline".into()))
        }
        async fn clear_session(&self) -> Result<(), BackendError> {
            Err(BackendError::Network("offline".into()))
        }
        async fn health(&self) -> Result<serde_json::Value, BackendError> {
            Err(BackendError::Network("offline".into()))
        }
    }

    fn shell() -> WidgetShell {
        let (tx, _rx) = mpsc::unbounded_channel();
        WidgetShell::new(&ChatdockConfig::default(), Arc::new(Offline), tx)
    }

    #[test]
    fn drag_command_moves_by_delta() {
        let mut shell = shell();
        dispatch(&mut shell, HostCommand::Open);
        dispatch(&mut shell, HostCommand::Drag { dx: -100.0, dy: -50.0 });
        assert_eq!(shell.geometry().unwrap().position, Point::new(656.0, 268.0));
    }

    #[test]
    fn resize_command_grows_from_corner() {
        let mut shell = shell();
        dispatch(&mut shell, HostCommand::Open);
        dispatch(&mut shell, HostCommand::Resize { dx: 40.0, dy: -300.0 });
        let g = shell.geometry().unwrap();
        assert_eq!(g.size, Size::new(540.0, 200.0));
        assert_eq!(g.position, Point::new(756.0, 318.0));
    }

    #[test]
    fn drag_in_fullscreen_is_reported() {
        let mut shell = shell();
        dispatch(&mut shell, HostCommand::Open);
        dispatch(&mut shell, HostCommand::Fullscreen);
        let out = dispatch(&mut shell, HostCommand::Drag { dx: 5.0, dy: 5.0 });
        assert_eq!(out.as_deref(), Some("drag ignored"));
    }

    #[test]
    fn show_renders_closed_panel() {
        let mut shell = shell();
        let out = dispatch(&mut shell, HostCommand::Show).unwrap();
        assert!(out.ends_with("panel: closed"));
    }

    #[test]
    fn policy_command_echoes_input() {
        let mut shell = shell();
        dispatch(&mut shell, HostCommand::Type("dress code?".into()));
        let out = dispatch(&mut shell, HostCommand::Policy("@dress_code".into()));
        assert_eq!(out.as_deref(), Some("input: dress code? @dress_code"));
    }
}
