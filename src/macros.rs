//! Formatting macros.
//!
//! `logger_*!` macros take a [`Logger`](crate::Logger) (or `&mut Logger`) as
//! their first argument; `log_*!` macros go to the process-wide default
//! logger. The remaining arguments follow `format!` syntax.
//!
//! `logger_values!` and `log_values!` take a severity followed by values.
//! Strings print as raw text, anything else with `Debug`, as one list when
//! there are several.

#[macro_export]
macro_rules! logger_log {
    ($logger:expr, $lvl:expr, $($arg:tt)*) => {
        $logger.log($lvl, $crate::Message::Formatted(format_args!($($arg)*)))
    };
}

#[macro_export]
macro_rules! logger_values {
    ($logger:expr, $lvl:expr, $($value:expr),* $(,)?) => {
        $logger.log($lvl, $crate::Message::Values(&[$(&$value),*]))
    };
}

#[macro_export]
macro_rules! logger_debug   { ($logger:expr, $($arg:tt)*) => { $logger.debug(format_args!($($arg)*)) } }
#[macro_export]
macro_rules! logger_info    { ($logger:expr, $($arg:tt)*) => { $logger.info(format_args!($($arg)*)) } }
#[macro_export]
macro_rules! logger_success { ($logger:expr, $($arg:tt)*) => { $logger.success(format_args!($($arg)*)) } }
#[macro_export]
macro_rules! logger_warning { ($logger:expr, $($arg:tt)*) => { $logger.warning(format_args!($($arg)*)) } }
#[macro_export]
macro_rules! logger_warn    { ($logger:expr, $($arg:tt)*) => { $logger.warning(format_args!($($arg)*)) } }
#[macro_export]
macro_rules! logger_error   { ($logger:expr, $($arg:tt)*) => { $logger.error(format_args!($($arg)*)) } }
#[macro_export]
macro_rules! logger_error_exit { ($logger:expr, $($arg:tt)*) => { $logger.error_exit(format_args!($($arg)*)) } }
#[macro_export]
macro_rules! logger_fatal   { ($logger:expr, $($arg:tt)*) => { $logger.fatal(format_args!($($arg)*)) } }

#[macro_export]
macro_rules! log_values {
    ($lvl:expr, $($value:expr),* $(,)?) => {
        $crate::global::log($lvl, $crate::Message::Values(&[$(&$value),*]))
    };
}

#[macro_export]
macro_rules! log_debug   { ($($arg:tt)*) => { $crate::global::debug(format_args!($($arg)*)) } }
#[macro_export]
macro_rules! log_info    { ($($arg:tt)*) => { $crate::global::info(format_args!($($arg)*)) } }
#[macro_export]
macro_rules! log_success { ($($arg:tt)*) => { $crate::global::success(format_args!($($arg)*)) } }
#[macro_export]
macro_rules! log_warning { ($($arg:tt)*) => { $crate::global::warning(format_args!($($arg)*)) } }
#[macro_export]
macro_rules! log_warn    { ($($arg:tt)*) => { $crate::global::warning(format_args!($($arg)*)) } }
#[macro_export]
macro_rules! log_error   { ($($arg:tt)*) => { $crate::global::error(format_args!($($arg)*)) } }
#[macro_export]
macro_rules! log_error_exit { ($($arg:tt)*) => { $crate::global::error_exit(format_args!($($arg)*)) } }
#[macro_export]
macro_rules! log_fatal   { ($($arg:tt)*) => { $crate::global::fatal(format_args!($($arg)*)) } }
