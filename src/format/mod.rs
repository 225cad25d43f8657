//! Line rendering.
//!
//! A line has the shape
//! `[color]TAG [timestamp][reset] message\n`, where the color escape and
//! reset only appear when colors are enabled and the bracketed timestamp
//! only appears when timestamps are enabled.

mod clock;

pub use clock::{Clock, FixedClock, SystemClock};

use crate::severity::{COLOR_RESET, Severity};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt::{self, Write as _};
use thiserror::Error;

/// RFC 822 layout (`02 Jan 06 15:04 +00:00`), independent of locale.
///
/// `%Z` on a fixed offset prints the numeric offset (`+09:00`), not a zone
/// abbreviation such as `JST`.
pub const RFC822_FORMAT: &str = "%d %b %y %H:%M %Z";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid timestamp format '{format}'")]
    InvalidTimestampFormat { format: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattingOptions {
    pub use_color: bool,
    pub show_timestamp: bool,
    /// chrono strftime template.
    pub timestamp_format: String,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            use_color: true,
            show_timestamp: true,
            timestamp_format: RFC822_FORMAT.to_string(),
        }
    }
}

impl FormattingOptions {
    /// No color, no timestamp.
    pub fn plain() -> Self {
        Self {
            use_color: false,
            show_timestamp: false,
            ..Self::default()
        }
    }
}

/// A value passed to the values form of a log call.
///
/// Strings (`&str`, `String`) print their raw text. Everything else prints
/// its `Debug` representation.
pub trait LogValue {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<T: fmt::Debug + Any> LogValue for T {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let any: &dyn Any = self;
        if let Some(text) = any.downcast_ref::<&str>() {
            f.write_str(text)
        } else if let Some(text) = any.downcast_ref::<String>() {
            f.write_str(text)
        } else {
            fmt::Debug::fmt(self, f)
        }
    }
}

impl fmt::Debug for dyn LogValue + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        LogValue::fmt_value(self, f)
    }
}

/// The text of a log call, before it is placed on a line.
#[derive(Clone, Copy)]
pub enum Message<'a> {
    /// Template with positional arguments, built with `format_args!`.
    Formatted(fmt::Arguments<'a>),
    /// Arbitrary values, each rendered through [`LogValue`].
    ///
    /// One value renders as itself. Several values render as one list
    /// (`[a, b]`), never as separate items.
    Values(&'a [&'a dyn LogValue]),
}

impl fmt::Display for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Formatted(args) => f.write_fmt(*args),
            Message::Values([single]) => LogValue::fmt_value(*single, f),
            Message::Values(values) => f.debug_list().entries(values.iter()).finish(),
        }
    }
}

impl fmt::Debug for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Formatted(args) => f.debug_tuple("Formatted").field(args).finish(),
            Message::Values(values) => f.debug_tuple("Values").field(values).finish(),
        }
    }
}

/// Renders lines for one set of [`FormattingOptions`].
///
/// The timestamp template is parsed once, when the formatter is built.
#[derive(Debug, Clone)]
pub struct Formatter {
    options: FormattingOptions,
    timestamp_items: Vec<Item<'static>>,
}

impl Formatter {
    pub fn new(options: FormattingOptions) -> Result<Self, FormatError> {
        let timestamp_items = compile_timestamp_format(&options.timestamp_format)?;
        Ok(Self {
            options,
            timestamp_items,
        })
    }

    pub fn options(&self) -> &FormattingOptions {
        &self.options
    }

    /// Builds the complete line, including the trailing newline.
    pub fn render(
        &self,
        severity: Severity,
        message: &Message<'_>,
        now: &DateTime<FixedOffset>,
    ) -> String {
        let mut line = String::with_capacity(64);

        if self.options.use_color {
            line.push_str(severity.color());
        }
        let _ = write!(line, "{:<3} ", severity.tag());
        if self.options.show_timestamp {
            let _ = write!(
                line,
                "[{}]",
                now.format_with_items(self.timestamp_items.iter())
            );
        }
        if self.options.use_color {
            line.push_str(COLOR_RESET);
        }
        let _ = writeln!(line, " {message}");

        line
    }
}

impl Default for Formatter {
    fn default() -> Self {
        let options = FormattingOptions::default();
        let timestamp_items =
            compile_timestamp_format(&options.timestamp_format).unwrap_or_default();
        Self {
            options,
            timestamp_items,
        }
    }
}

/// Checks a strftime template without building a formatter.
pub fn validate_timestamp_format(format: &str) -> Result<(), FormatError> {
    compile_timestamp_format(format).map(|_| ())
}

fn compile_timestamp_format(format: &str) -> Result<Vec<Item<'static>>, FormatError> {
    StrftimeItems::new(format)
        .parse_to_owned()
        .map_err(|_| FormatError::InvalidTimestampFormat {
            format: format.to_string(),
        })
}
