//! Line-oriented host driver.
//!
//! Stands in for the page hosting the widget: host events arrive on
//! standard input, one per line, and every state event the shell publishes
//! is printed as it happens. Backend completions are applied on the same
//! loop, so the shell is only ever touched from one place.

mod command;
mod dispatch;
mod render;

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tokio::sync::{broadcast, mpsc};
use tracing::{info, warn};

use crate::shell::{Completion, WidgetShell};

pub use command::HostCommand;
pub use dispatch::dispatch;

/// Run until `quit` or end of input.
pub async fn run(
    mut shell: WidgetShell,
    mut completions: mpsc::UnboundedReceiver<Completion>,
) -> chatdock_common::Result<()> {
    let mut events = shell.events().subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    shell.mount();
    println!("chatdock ready, type 'help' for commands");

    loop {
        tokio::select! {
            line = next_line(&mut lines) => {
                let Some(line) = line? else {
                    info!("input closed");
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<HostCommand>() {
                    Ok(HostCommand::Quit) => break,
                    Ok(command) => {
                        if let Some(output) = dispatch(&mut shell, command) {
                            println!("{output}");
                        }
                    }
                    Err(e) => println!("{e}"),
                }
            }

            Some(completion) = completions.recv() => {
                shell.apply_completion(completion);
            }

            event = events.recv() => match event {
                Ok(event) => println!("{}", render::event_line(&event)),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "event printer fell behind");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            },
        }
    }

    if shell.in_flight() > 0 {
        info!(in_flight = shell.in_flight(), "exiting with backend calls outstanding");
    }
    Ok(())
}

/// Next decodable line, or `None` at end of input. Lines that are not
/// UTF-8 are dropped; other read errors are returned.
async fn next_line<R: AsyncBufRead + Unpin>(lines: &mut Lines<R>) -> io::Result<Option<String>> {
    loop {
        match lines.next_line().await {
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                warn!(error = %e, "skipping undecodable input line");
            }
            other => return other,
        }
    }
}
