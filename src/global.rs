//! Process-wide default logger.
//!
//! The default instance is built on first use with an info threshold,
//! standard output, colors and RFC 822 timestamps. All access goes through
//! one lock, so lines from different threads never interleave and
//! reconfiguration is race-free.
//!
//! The lock is reentrant. A logging call made while the same thread already
//! holds the default logger (from the closure given to [`with_default`], from
//! a value's `Debug` impl, or from a `tracing` event routed here by
//! [`LoggerLayer`](crate::LoggerLayer)) is dropped instead of deadlocking.
//! Reconfiguring or terminating from such a nested call panics.

use crate::format::{LogValue, Message};
use crate::logger::Logger;
use crate::severity::Severity;
use parking_lot::ReentrantMutex;
use std::cell::RefCell;
use std::fmt;
use std::io::Write;
use std::sync::LazyLock;

static DEFAULT_LOGGER: LazyLock<ReentrantMutex<RefCell<Logger>>> =
    LazyLock::new(|| ReentrantMutex::new(RefCell::new(Logger::stdout())));

fn locked<R>(f: impl FnOnce(&mut Logger) -> R) -> R {
    let guard = DEFAULT_LOGGER.lock();
    let mut logger = guard.borrow_mut();
    f(&mut logger)
}

fn try_locked(f: impl FnOnce(&mut Logger)) -> bool {
    let guard = DEFAULT_LOGGER.lock();
    let Ok(mut logger) = guard.try_borrow_mut() else {
        return false;
    };
    f(&mut logger);
    true
}

/// Runs `f` with exclusive access to the default logger.
///
/// # Panics
///
/// If the calling thread is already inside `with_default`.
pub fn with_default<R>(f: impl FnOnce(&mut Logger) -> R) -> R {
    locked(f)
}

/// Replaces the default logger and returns the previous one.
pub fn set_default_logger(logger: Logger) -> Logger {
    locked(|current| std::mem::replace(current, logger))
}

pub fn level() -> Severity {
    locked(|logger| logger.level())
}

pub fn set_level(level: Severity) {
    locked(|logger| logger.set_level(level));
}

pub fn set_writer<W>(writer: W)
where
    W: Write + Send + 'static,
{
    locked(|logger| logger.set_writer(writer));
}

/// Logs through the default logger unless this thread already holds it.
///
/// Returns `false` when the line was dropped for that reason.
pub fn try_log(severity: Severity, message: Message<'_>) -> bool {
    try_locked(|logger| logger.log(severity, message))
}

pub fn log(severity: Severity, message: Message<'_>) {
    try_log(severity, message);
}

pub fn debug(args: fmt::Arguments<'_>) {
    try_locked(|logger| logger.debug(args));
}

pub fn debug_values(values: &[&dyn LogValue]) {
    try_locked(|logger| logger.debug_values(values));
}

pub fn info(args: fmt::Arguments<'_>) {
    try_locked(|logger| logger.info(args));
}

pub fn info_values(values: &[&dyn LogValue]) {
    try_locked(|logger| logger.info_values(values));
}

pub fn success(args: fmt::Arguments<'_>) {
    try_locked(|logger| logger.success(args));
}

pub fn success_values(values: &[&dyn LogValue]) {
    try_locked(|logger| logger.success_values(values));
}

pub fn warning(args: fmt::Arguments<'_>) {
    try_locked(|logger| logger.warning(args));
}

pub fn warning_values(values: &[&dyn LogValue]) {
    try_locked(|logger| logger.warning_values(values));
}

pub fn warn(args: fmt::Arguments<'_>) {
    warning(args);
}

pub fn warn_values(values: &[&dyn LogValue]) {
    warning_values(values);
}

pub fn error(args: fmt::Arguments<'_>) {
    try_locked(|logger| logger.error(args));
}

pub fn error_values(values: &[&dyn LogValue]) {
    try_locked(|logger| logger.error_values(values));
}

pub fn error_exit(args: fmt::Arguments<'_>) {
    locked(|logger| logger.error_exit(args));
}

pub fn error_exit_values(values: &[&dyn LogValue]) {
    locked(|logger| logger.error_exit_values(values));
}

pub fn fatal(args: fmt::Arguments<'_>) {
    locked(|logger| logger.fatal(args));
}

pub fn fatal_values(values: &[&dyn LogValue]) {
    locked(|logger| logger.fatal_values(values));
}
