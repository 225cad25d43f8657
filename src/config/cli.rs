use super::{ConfigError, LoggerConfig, Output};
use crate::severity::Severity;
use clap::Parser;
use std::path::PathBuf;

/// Command line for the `dnut-logger` binary.
///
/// Settings are layered: config file (or defaults), then `DNUT_LOG_*`
/// environment variables, then flags.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Print a leveled, colorized log line", long_about = None)]
pub struct Cli {
    /// Logger configuration file (TOML)
    #[arg(long, env = "DNUT_LOG_CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Minimum severity to emit (debug, info, success, warning, error, fatal)
    #[arg(long)]
    pub level: Option<Severity>,

    /// Severity of the message
    #[arg(long, short, default_value = "info")]
    pub severity: Severity,

    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,

    /// Omit the timestamp
    #[arg(long)]
    pub no_timestamp: bool,

    /// chrono strftime template for the timestamp
    #[arg(long)]
    pub timestamp_format: Option<String>,

    /// stdout, stderr or a file path
    #[arg(long, short)]
    pub output: Option<Output>,

    /// Exit with status 1 after an error message
    #[arg(long)]
    pub exit: bool,

    /// Message words, joined with single spaces
    #[arg(required = true, trailing_var_arg = true)]
    pub message: Vec<String>,
}

impl Cli {
    pub fn logger_config(&self) -> Result<LoggerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => LoggerConfig::from_file(path)?,
            None => LoggerConfig::default(),
        };
        config.apply_env()?;

        if let Some(level) = self.level {
            config.level = level;
        }
        if self.no_color {
            config.formatting.use_color = false;
        }
        if self.no_timestamp {
            config.formatting.show_timestamp = false;
        }
        if let Some(format) = &self.timestamp_format {
            config.formatting.timestamp_format = format.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn message(&self) -> String {
        self.message.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_parse() {
        let cli = Cli::parse_from([
            "dnut-logger",
            "--level",
            "DBG",
            "--severity",
            "warn",
            "--no-color",
            "--output",
            "stderr",
            "disk",
            "almost",
            "full",
        ]);

        assert_eq!(cli.level, Some(Severity::Debug));
        assert_eq!(cli.severity, Severity::Warning);
        assert!(cli.no_color);
        assert!(!cli.no_timestamp);
        assert_eq!(cli.output, Some(Output::Stderr));
        assert_eq!(cli.message(), "disk almost full");
    }

    #[test]
    fn test_severity_defaults_to_info() {
        let cli = Cli::parse_from(["dnut-logger", "hello"]);
        assert_eq!(cli.severity, Severity::Info);
        assert_eq!(cli.level, None);
    }

    #[test]
    fn test_message_is_required() {
        assert!(Cli::try_parse_from(["dnut-logger"]).is_err());
    }
}
