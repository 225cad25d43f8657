use crate::bridge::LoggerLayer;
use crate::config::Cli;
use crate::format::Message;
use crate::global;
use crate::severity::Severity;
use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, prelude::*};

const DEFAULT_TRACING_FILTER: &str = "warn";

/// Routes `tracing` events from this crate and its dependencies through
/// the default logger. `RUST_LOG` overrides the filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACING_FILTER));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(LoggerLayer::default_logger())
        .try_init();
}

pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Installs the configured logger and emits the message.
///
/// Tracing is routed to the default logger first, so events raised while
/// the configuration loads reach the built-in stdout logger.
///
/// Fatal messages, and error messages with `--exit`, end the process with
/// status 1 once the line is written.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    init_tracing();

    let config = cli
        .logger_config()
        .context("failed to load logger configuration")?;
    config
        .install()
        .with_context(|| format!("failed to open log output '{}'", config.output))?;

    let message = cli.message();
    match cli.severity {
        Severity::Fatal => global::fatal(format_args!("{message}")),
        Severity::Error if cli.exit => global::error_exit(format_args!("{message}")),
        severity => global::log(severity, Message::Formatted(format_args!("{message}"))),
    }

    Ok(())
}

pub fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(&cli)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_display() {
        assert_eq!(get_version(), env!("CARGO_PKG_VERSION"));
    }
}
