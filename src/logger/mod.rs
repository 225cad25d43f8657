mod hooks;
mod writer;

pub use hooks::{
    CapturedBacktrace, EXIT_FAILURE, ExitProcess, NoStackTrace, ProcessTerminator,
    RecordingTerminator, StackTraceProvider,
};
pub use writer::SharedBuffer;

use crate::format::{
    Clock, FormatError, Formatter, FormattingOptions, LogValue, Message, SystemClock,
};
use crate::severity::Severity;
use std::fmt;
use std::io::{self, Write};

/// A leveled line logger writing to one destination.
///
/// Every call is checked against the threshold first; gated calls do
/// nothing. Emitted lines are rendered in full and written with a single
/// `write_all`, followed by a flush. Write errors are ignored.
///
/// `fatal` and `error_exit` hand [`EXIT_FAILURE`] to the installed
/// [`ProcessTerminator`] once the line is written. With the default
/// terminator the process ends there.
pub struct Logger {
    level: Severity,
    writer: Box<dyn Write + Send>,
    formatter: Formatter,
    clock: Box<dyn Clock>,
    stack_trace: Box<dyn StackTraceProvider>,
    terminator: Box<dyn ProcessTerminator>,
}

impl Logger {
    pub fn new<W>(level: Severity, writer: W, options: FormattingOptions) -> Result<Self, FormatError>
    where
        W: Write + Send + 'static,
    {
        Ok(Self::with_formatter(level, writer, Formatter::new(options)?))
    }

    pub fn with_formatter<W>(level: Severity, writer: W, formatter: Formatter) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            level,
            writer: Box::new(writer),
            formatter,
            clock: Box::new(SystemClock),
            stack_trace: Box::new(NoStackTrace),
            terminator: Box::new(ExitProcess),
        }
    }

    /// Info threshold, standard output, colors and RFC 822 timestamps.
    pub fn stdout() -> Self {
        Self::with_formatter(Severity::Info, io::stdout(), Formatter::default())
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_stack_trace(mut self, provider: impl StackTraceProvider + 'static) -> Self {
        self.stack_trace = Box::new(provider);
        self
    }

    pub fn with_terminator(mut self, terminator: impl ProcessTerminator + 'static) -> Self {
        self.terminator = Box::new(terminator);
        self
    }

    pub fn level(&self) -> Severity {
        self.level
    }

    pub fn set_level(&mut self, level: Severity) {
        self.level = level;
    }

    /// Redirects all later lines. Lines already written stay where they are.
    pub fn set_writer<W>(&mut self, writer: W)
    where
        W: Write + Send + 'static,
    {
        let _ = self.writer.flush();
        self.writer = Box::new(writer);
    }

    pub fn options(&self) -> &FormattingOptions {
        self.formatter.options()
    }

    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity.is_enabled(self.level)
    }

    /// Writes one line at `severity` unless it is below the threshold.
    ///
    /// Never terminates the process, even for [`Severity::Fatal`]; use
    /// [`Logger::fatal`] for that.
    pub fn log(&mut self, severity: Severity, message: Message<'_>) {
        if !self.is_enabled(severity) {
            return;
        }

        if severity.is_error_class()
            && let Some(trace) = self.stack_trace.capture()
        {
            let _ = self.writer.write_all(trace.as_bytes());
        }

        let line = self.formatter.render(severity, &message, &self.clock.now());
        let _ = self.writer.write_all(line.as_bytes());
        let _ = self.writer.flush();
    }

    fn log_and_exit(&mut self, severity: Severity, message: Message<'_>) {
        self.log(severity, message);
        self.terminator.terminate(EXIT_FAILURE);
    }

    pub fn debug(&mut self, args: fmt::Arguments<'_>) {
        self.log(Severity::Debug, Message::Formatted(args));
    }

    pub fn debug_values(&mut self, values: &[&dyn LogValue]) {
        self.log(Severity::Debug, Message::Values(values));
    }

    pub fn info(&mut self, args: fmt::Arguments<'_>) {
        self.log(Severity::Info, Message::Formatted(args));
    }

    pub fn info_values(&mut self, values: &[&dyn LogValue]) {
        self.log(Severity::Info, Message::Values(values));
    }

    pub fn success(&mut self, args: fmt::Arguments<'_>) {
        self.log(Severity::Success, Message::Formatted(args));
    }

    pub fn success_values(&mut self, values: &[&dyn LogValue]) {
        self.log(Severity::Success, Message::Values(values));
    }

    pub fn warning(&mut self, args: fmt::Arguments<'_>) {
        self.log(Severity::Warning, Message::Formatted(args));
    }

    pub fn warning_values(&mut self, values: &[&dyn LogValue]) {
        self.log(Severity::Warning, Message::Values(values));
    }

    /// Alias of [`Logger::warning`].
    pub fn warn(&mut self, args: fmt::Arguments<'_>) {
        self.warning(args);
    }

    /// Alias of [`Logger::warning_values`].
    pub fn warn_values(&mut self, values: &[&dyn LogValue]) {
        self.warning_values(values);
    }

    pub fn error(&mut self, args: fmt::Arguments<'_>) {
        self.log(Severity::Error, Message::Formatted(args));
    }

    pub fn error_values(&mut self, values: &[&dyn LogValue]) {
        self.log(Severity::Error, Message::Values(values));
    }

    /// Logs at error severity, then exits with status 1.
    ///
    /// The exit happens even when error lines are below the threshold.
    pub fn error_exit(&mut self, args: fmt::Arguments<'_>) {
        self.log_and_exit(Severity::Error, Message::Formatted(args));
    }

    pub fn error_exit_values(&mut self, values: &[&dyn LogValue]) {
        self.log_and_exit(Severity::Error, Message::Values(values));
    }

    /// Logs at fatal severity, then exits with status 1.
    pub fn fatal(&mut self, args: fmt::Arguments<'_>) {
        self.log_and_exit(Severity::Fatal, Message::Formatted(args));
    }

    pub fn fatal_values(&mut self, values: &[&dyn LogValue]) {
        self.log_and_exit(Severity::Fatal, Message::Values(values));
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("options", self.formatter.options())
            .finish_non_exhaustive()
    }
}
