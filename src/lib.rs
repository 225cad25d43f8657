//! Leveled, colorized console logging.
//!
//! Lines look like `INF [05 Mar 24 14:07 +00:00] message`, optionally
//! wrapped in ANSI colors. Use a [`Logger`] instance directly, or the
//! process-wide default through the free functions in [`global`] and the
//! `log_*!` macros.

#![deny(warnings, rust_2024_compatibility)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
// Noisy pedantic lints suppressed with justification:
#![allow(
    clippy::missing_errors_doc,       // Internal API
    clippy::missing_panics_doc,       // Internal API
    clippy::module_name_repetitions,  // e.g. ConfigError in config module
    clippy::must_use_candidate,       // Annotated selectively on critical APIs
    clippy::doc_markdown              // Internal API
)]

#[macro_use]
mod macros;

pub mod app;
pub mod bridge;
pub mod config;
pub mod format;
pub mod global;
pub mod logger;
pub mod severity;

// Re-export main types for easy access
pub use bridge::LoggerLayer;
pub use config::{ConfigError, LoggerConfig, Output};
pub use format::{
    Clock, FixedClock, FormatError, Formatter, FormattingOptions, LogValue, Message,
    RFC822_FORMAT, SystemClock,
};
pub use global::set_default_logger;
pub use logger::{
    CapturedBacktrace, EXIT_FAILURE, ExitProcess, Logger, NoStackTrace, ProcessTerminator,
    RecordingTerminator, SharedBuffer, StackTraceProvider,
};
pub use severity::{COLOR_RESET, Severity};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
