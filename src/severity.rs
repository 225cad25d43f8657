use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// ANSI sequence that ends a colored span.
pub const COLOR_RESET: &str = "\x1b[0m";

/// Severity of a log line.
///
/// The derived ordering is the filtering order: a line is emitted when its
/// severity is greater than or equal to the logger threshold.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Severity {
    Debug,
    #[default]
    Info,
    Success,
    Warning,
    Error,
    Fatal,
}

impl Severity {
    pub const ALL: [Severity; 6] = [
        Severity::Debug,
        Severity::Info,
        Severity::Success,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
    ];

    /// Three letter tag printed at the start of every line.
    pub fn tag(&self) -> &'static str {
        match self {
            Severity::Debug => "DBG",
            Severity::Info => "INF",
            Severity::Success => "SUC",
            Severity::Warning => "WAR",
            Severity::Error => "ERR",
            Severity::Fatal => "FTL",
        }
    }

    /// ANSI color escape used when colored output is enabled.
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Debug => "\x1b[0;90m",
            Severity::Info => "\x1b[0;94m",
            Severity::Success => "\x1b[0;92m",
            Severity::Warning => "\x1b[0;93m",
            Severity::Error => "\x1b[0;91m",
            Severity::Fatal => "\x1b[0;31m",
        }
    }

    /// Lowercase long name, the form used in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
        }
    }

    pub fn is_enabled(&self, threshold: Severity) -> bool {
        *self >= threshold
    }

    /// Severities whose lines are preceded by a stack trace when a provider
    /// is installed.
    pub fn is_error_class(&self) -> bool {
        matches!(self, Severity::Error | Severity::Fatal)
    }

    /// Maps a free-form name to a severity, case-insensitively.
    ///
    /// Accepts long names and three letter tags. Anything unrecognised maps
    /// to [`Severity::Info`]; this never fails.
    pub fn from_name(name: &str) -> Severity {
        match name.trim().to_lowercase().as_str() {
            "debug" | "dbg" => Severity::Debug,
            "info" | "inf" => Severity::Info,
            "success" | "suc" => Severity::Success,
            "warn" | "warning" | "war" => Severity::Warning,
            "error" | "err" => Severity::Error,
            "fatal" | "ftl" => Severity::Fatal,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.tag())
    }
}

impl FromStr for Severity {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Severity::from_name(s))
    }
}

impl From<&str> for Severity {
    fn from(name: &str) -> Self {
        Severity::from_name(name)
    }
}

impl From<String> for Severity {
    fn from(name: String) -> Self {
        Severity::from_name(&name)
    }
}

impl From<Severity> for tracing::Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Debug => tracing::Level::DEBUG,
            Severity::Info | Severity::Success => tracing::Level::INFO,
            Severity::Warning => tracing::Level::WARN,
            Severity::Error | Severity::Fatal => tracing::Level::ERROR,
        }
    }
}

impl From<tracing::Level> for Severity {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::TRACE | tracing::Level::DEBUG => Severity::Debug,
            tracing::Level::INFO => Severity::Info,
            tracing::Level::WARN => Severity::Warning,
            tracing::Level::ERROR => Severity::Error,
        }
    }
}
