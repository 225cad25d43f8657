mod cli;
pub mod serde_helpers;
mod validation;

pub use cli::Cli;

use crate::format::{FormatError, FormattingOptions};
use crate::global;
use crate::logger::Logger;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use serde_helpers::{load_env_bool, load_env_string, load_env_var};
use std::convert::Infallible;
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

pub const ENV_CONFIG: &str = "DNUT_LOG_CONFIG";
pub const ENV_LEVEL: &str = "DNUT_LOG_LEVEL";
pub const ENV_COLOR: &str = "DNUT_LOG_COLOR";
pub const ENV_TIMESTAMP: &str = "DNUT_LOG_TIMESTAMP";
pub const ENV_TIMESTAMP_FORMAT: &str = "DNUT_LOG_TIMESTAMP_FORMAT";
pub const ENV_OUTPUT: &str = "DNUT_LOG_OUTPUT";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("File error: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Environment error: {0}")]
    EnvError(String),
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Output {
    #[default]
    Stdout,
    Stderr,
    /// Appended to, created if missing.
    File(PathBuf),
}

impl Output {
    pub fn open(&self) -> Result<Box<dyn Write + Send>, ConfigError> {
        Ok(match self {
            Output::Stdout => Box::new(io::stdout()),
            Output::Stderr => Box::new(io::stderr()),
            Output::File(path) => Box::new(OpenOptions::new().create(true).append(true).open(path)?),
        })
    }
}

impl From<String> for Output {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "" | "-" | "stdout" => Output::Stdout,
            "stderr" => Output::Stderr,
            _ => Output::File(PathBuf::from(value.trim())),
        }
    }
}

impl FromStr for Output {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Output::from(s.to_string()))
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Stdout => f.write_str("stdout"),
            Output::Stderr => f.write_str("stderr"),
            Output::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl From<Output> for String {
    fn from(output: Output) -> Self {
        output.to_string()
    }
}

/// Everything needed to build a [`Logger`].
///
/// In TOML the formatting options sit at the top level:
///
/// ```toml
/// level = "debug"
/// output = "stderr"
/// use_color = false
/// show_timestamp = true
/// timestamp_format = "%H:%M:%S"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: Severity,
    pub output: Output,
    #[serde(flatten)]
    pub formatting: FormattingOptions,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Severity::Info,
            output: Output::Stdout,
            formatting: FormattingOptions::default(),
        }
    }
}

impl LoggerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: LoggerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::info!("loading logger configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Defaults overlaid with `DNUT_LOG_*` variables.
    ///
    /// When `DNUT_LOG_CONFIG` is set it is parsed as inline TOML first.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(ENV_CONFIG) {
            Ok(inline) => toml::from_str(&inline)?,
            Err(_) => LoggerConfig::default(),
        };
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Overrides fields with any `DNUT_LOG_*` variables that are set.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        load_env_var(ENV_LEVEL, &mut self.level)?;
        load_env_bool(ENV_COLOR, &mut self.formatting.use_color)?;
        load_env_bool(ENV_TIMESTAMP, &mut self.formatting.show_timestamp)?;
        load_env_string(ENV_TIMESTAMP_FORMAT, &mut self.formatting.timestamp_format);
        load_env_var(ENV_OUTPUT, &mut self.output)?;
        Ok(())
    }

    pub fn build(&self) -> Result<Logger, ConfigError> {
        self.validate()?;
        let writer = self.output.open()?;
        Ok(Logger::new(self.level, writer, self.formatting.clone())?)
    }

    /// Builds a logger and makes it the process-wide default.
    pub fn install(&self) -> Result<(), ConfigError> {
        let logger = self.build()?;
        global::set_default_logger(logger);
        Ok(())
    }
}
