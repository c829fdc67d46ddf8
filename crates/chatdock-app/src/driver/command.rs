//! Host events as text lines.

use std::str::FromStr;

/// One line of host input.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCommand {
    /// Launcher click.
    Open,
    Close,
    Fullscreen,
    Viewport { width: f64, height: f64 },
    /// Drag the header by a delta, as one press-move-release.
    Drag { dx: f64, dy: f64 },
    /// Drag the corner handle by a delta.
    Resize { dx: f64, dy: f64 },
    Type(String),
    Send,
    Profiles,
    Select(String),
    Dropdown,
    /// Avatar click, or the popup's close control when it is showing.
    Info,
    /// Pointer press at page coordinates.
    Click { x: f64, y: f64 },
    Policy(String),
    Show,
    Help,
    Quit,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

pub const HELP: &str = "\
commands:
  open | close | fullscreen
  viewport W H        host window resized
  drag DX DY          move the panel by a delta
  resize DX DY        resize the panel by a delta
  type TEXT           replace the input buffer
  send                submit the input buffer
  policy KEY          toggle a policy tag such as @leave
  profiles            list profiles
  dropdown            toggle the profile dropdown
  select TITLE        pick a profile
  info                toggle the profile info popup
  click X Y           pointer press on the page
  show                print widget state
  quit";

impl FromStr for HostCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let command = match name {
            "open" => HostCommand::Open,
            "close" => HostCommand::Close,
            "fullscreen" => HostCommand::Fullscreen,
            "viewport" => {
                let (width, height) = pair(rest).ok_or(CommandError::Usage("viewport W H"))?;
                HostCommand::Viewport { width, height }
            }
            "drag" => {
                let (dx, dy) = pair(rest).ok_or(CommandError::Usage("drag DX DY"))?;
                HostCommand::Drag { dx, dy }
            }
            "resize" => {
                let (dx, dy) = pair(rest).ok_or(CommandError::Usage("resize DX DY"))?;
                HostCommand::Resize { dx, dy }
            }
            "type" => HostCommand::Type(rest.to_string()),
            "send" => HostCommand::Send,
            "profiles" => HostCommand::Profiles,
            "select" if !rest.is_empty() => HostCommand::Select(rest.to_string()),
            "select" => return Err(CommandError::Usage("select TITLE")),
            "dropdown" => HostCommand::Dropdown,
            "info" => HostCommand::Info,
            "click" => {
                let (x, y) = pair(rest).ok_or(CommandError::Usage("click X Y"))?;
                HostCommand::Click { x, y }
            }
            "policy" if !rest.is_empty() => HostCommand::Policy(rest.to_string()),
            "policy" => return Err(CommandError::Usage("policy KEY")),
            "show" => HostCommand::Show,
            "help" | "?" => HostCommand::Help,
            "quit" | "exit" => HostCommand::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

/// Two whitespace-separated numbers, nothing else.
fn pair(args: &str) -> Option<(f64, f64)> {
    let mut parts = args.split_whitespace();
    let a = parts.next()?.parse().ok()?;
    let b = parts.next()?.parse().ok()?;
    parts.next().is_none().then_some((a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_commands() {
        assert_eq!("open".parse::<HostCommand>(), Ok(HostCommand::Open));
        assert_eq!("  fullscreen ".parse::<HostCommand>(), Ok(HostCommand::Fullscreen));
        assert_eq!("exit".parse::<HostCommand>(), Ok(HostCommand::Quit));
    }

    #[test]
    fn parses_numeric_arguments() {
        assert_eq!(
            "drag -500 -500".parse::<HostCommand>(),
            Ok(HostCommand::Drag {
                dx: -500.0,
                dy: -500.0
            })
        );
        assert_eq!(
            "viewport 800 600".parse::<HostCommand>(),
            Ok(HostCommand::Viewport {
                width: 800.0,
                height: 600.0
            })
        );
    }

    #[test]
    fn rejects_bad_numbers() {
        assert_eq!(
            "resize 10".parse::<HostCommand>(),
            Err(CommandError::Usage("resize DX DY"))
        );
        assert_eq!(
            "click 1 2 3".parse::<HostCommand>(),
            Err(CommandError::Usage("click X Y"))
        );
    }

    #[test]
    fn text_arguments_keep_inner_spaces() {
        assert_eq!(
            "type how many days of  @leave".parse::<HostCommand>(),
            Ok(HostCommand::Type("how many days of  @leave".into()))
        );
        assert_eq!(
            "select IT Support".parse::<HostCommand>(),
            Ok(HostCommand::Select("IT Support".into()))
        );
    }

    #[test]
    fn select_needs_a_title() {
        assert_eq!(
            "select".parse::<HostCommand>(),
            Err(CommandError::Usage("select TITLE"))
        );
    }

    #[test]
    fn unknown_command() {
        assert_eq!(
            "launch".parse::<HostCommand>(),
            Err(CommandError::Unknown("launch".into()))
        );
    }
}
