mod cli;
mod driver;
mod shell;

use std::process::ExitCode;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use chatdock_agent::{ChatBackend, HttpBackend, HttpBackendConfig};
use chatdock_common::{new_correlation_id, ChatdockError};
use chatdock_config::schema::{ChatdockConfig, LogLevel};

use shell::WidgetShell;

/// Load environment variables from a .env file (KEY=VALUE lines).
/// Variables already set in the environment win.
fn load_dotenv() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        std::path::PathBuf::from(".env"),
        // workspace root, two levels up from crates/chatdock-app/
        manifest_dir.join("..").join("..").join(".env"),
    ];

    for path in &candidates {
        let Ok(contents) = std::fs::read_to_string(path) else {
            continue;
        };
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim().trim_matches('"').trim_matches('\'');
                if std::env::var(key).is_err() {
                    std::env::set_var(key, value);
                }
            }
        }
        return;
    }
}

/// A bare level applies to the chatdock crates only; anything else is
/// taken as a full filter directive.
fn log_directive(cli_level: Option<&str>, config_level: LogLevel) -> String {
    match cli_level {
        Some(level) if level.contains('=') => level.to_string(),
        Some(level) => format!("chatdock={level}"),
        None => format!("chatdock={}", config_level.as_directive()),
    }
}

fn init_logging(directive: &str) {
    let fallback = || "chatdock=info".parse().unwrap();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(directive.parse().unwrap_or_else(|_| fallback())),
        )
        .init();
}

fn run(args: cli::Args, mut config: ChatdockConfig) -> chatdock_common::Result<ExitCode> {
    if let Some(url) = args.base_url.as_deref() {
        tracing::info!(%url, "backend base URL overridden on the command line");
        config.backend.base_url = url.trim().trim_end_matches('/').to_string();
    }

    let backend = HttpBackend::new(HttpBackendConfig::from_schema(&config.backend))
        .map_err(|e| ChatdockError::Backend(e.to_string()))?;
    tracing::info!(base_url = %backend.config().base_url, "backend configured");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| ChatdockError::Runtime(format!("failed to start runtime: {e}")))?;

    if args.check {
        return Ok(runtime.block_on(async {
            match backend.health().await {
                Ok(status) => {
                    println!("{status}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("backend unhealthy: {e}");
                    ExitCode::FAILURE
                }
            }
        }));
    }

    let (tx, rx) = mpsc::unbounded_channel();
    let backend: Arc<dyn ChatBackend> = Arc::new(backend);
    let shell = WidgetShell::new(&config, backend, tx);
    runtime.block_on(driver::run(shell, rx))?;
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    load_dotenv();

    let args = cli::parse();

    let loaded = chatdock_config::load_config(args.config.as_deref());
    let config_level = loaded
        .as_ref()
        .map(|c| c.logging.level)
        .unwrap_or_default();
    init_logging(&log_directive(args.log_level.as_deref(), config_level));

    let session = new_correlation_id();
    tracing::info!(%session, "Chatdock v{} starting...", env!("CARGO_PKG_VERSION"));

    // An explicit --config must load; the default location falls back.
    let config = match loaded {
        Ok(config) => config,
        Err(e) if args.config.is_some() => {
            tracing::error!("{}", ChatdockError::from(e));
            return ExitCode::FAILURE;
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            ChatdockConfig::default()
        }
    };

    match run(args, config) {
        Ok(code) => {
            tracing::info!("Shutdown complete");
            code
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_level_targets_chatdock_crates() {
        assert_eq!(log_directive(Some("debug"), LogLevel::Info), "chatdock=debug");
    }

    #[test]
    fn full_directive_is_kept() {
        assert_eq!(
            log_directive(Some("chatdock_agent=trace"), LogLevel::Info),
            "chatdock_agent=trace"
        );
    }

    #[test]
    fn config_level_is_the_default() {
        assert_eq!(log_directive(None, LogLevel::Warning), "chatdock=warn");
    }
}
