//! Plain-text rendering of widget state.

use std::fmt::Write;

use chatdock_common::StateEvent;

use crate::shell::WidgetShell;

pub fn describe(shell: &WidgetShell) -> String {
    let mut out = String::new();
    let viewport = shell.viewport();
    let _ = writeln!(out, "viewport: {}x{}", viewport.width, viewport.height);

    if !shell.is_open() {
        let _ = write!(out, "panel: closed");
        return out;
    }
    if let Some(g) = shell.geometry() {
        let _ = writeln!(
            out,
            "panel: open at ({}, {}) {}{}",
            g.position.x,
            g.position.y,
            g.size,
            if g.is_fullscreen { " fullscreen" } else { "" }
        );
    }

    let store = shell.store();
    match store.active_profile() {
        Some(profile) => {
            let _ = writeln!(out, "profile: {}", profile.title);
            if shell.is_info_popup_open() {
                let description = if profile.description.is_empty() {
                    "No description available."
                } else {
                    profile.description.as_str()
                };
                let _ = writeln!(out, "  [{} Agent] {}", profile.title, description);
            }
        }
        None => {
            let _ = writeln!(out, "profile: none");
        }
    }
    if shell.is_profile_dropdown_open() {
        out.push_str(&profile_list(shell));
        out.push('\n');
    }

    for message in store.active_history() {
        let who = if message.is_user { "you" } else { "bot" };
        let _ = writeln!(out, "  {who}: {}", message.text);
    }
    if shell.is_thinking() {
        let _ = writeln!(out, "  bot: thinking...");
    }
    let _ = write!(out, "> {}", shell.input());
    out
}

pub fn profile_list(shell: &WidgetShell) -> String {
    let store = shell.store();
    if store.profiles().is_empty() {
        return "no profiles".to_string();
    }
    let active = store.active_profile();
    store
        .profiles()
        .iter()
        .map(|p| {
            let marker = if Some(p) == active { '*' } else { ' ' };
            format!("{marker} {} - {}", p.title, p.description)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn event_line(event: &StateEvent) -> String {
    match serde_json::to_string(event) {
        Ok(json) => format!("event {json}"),
        Err(e) => format!("event <unserializable: {e}>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatdock_common::Rect;

    #[test]
    fn event_line_is_tagged_json() {
        assert_eq!(
            event_line(&StateEvent::AwaitingChanged(true)),
            r#"event {"type":"AwaitingChanged","data":true}"#
        );
        let line = event_line(&StateEvent::GeometryChanged {
            rect: Rect {
                x: 20.0,
                y: 20.0,
                width: 400.0,
                height: 300.0,
            },
            fullscreen: false,
        });
        assert!(line.contains(r#""type":"GeometryChanged""#));
    }
}
