use std::path::PathBuf;

use clap::Parser;

/// Chatdock: a floating chat widget driven from the terminal.
#[derive(Parser, Debug)]
#[command(name = "chatdock", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error), or a full filter
    /// directive.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Backend base URL. Wins over the config file and environment.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Probe the backend health endpoint and exit.
    #[arg(long)]
    pub check: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
