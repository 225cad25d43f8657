use parking_lot::Mutex;
use std::backtrace::Backtrace;
use std::sync::Arc;

/// Exit status used by `fatal` and `error_exit`.
pub const EXIT_FAILURE: i32 = 1;

/// Captures the current call stack as text for error-class lines.
pub trait StackTraceProvider: Send + Sync {
    /// Returns `None` when no trace is available.
    fn capture(&self) -> Option<String>;
}

/// Writes no trace.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStackTrace;

impl StackTraceProvider for NoStackTrace {
    fn capture(&self) -> Option<String> {
        None
    }
}

/// Uses the standard library backtrace, regardless of `RUST_BACKTRACE`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CapturedBacktrace;

impl StackTraceProvider for CapturedBacktrace {
    fn capture(&self) -> Option<String> {
        let mut trace = Backtrace::force_capture().to_string();
        if trace.is_empty() {
            return None;
        }
        if !trace.ends_with('\n') {
            trace.push('\n');
        }
        Some(trace)
    }
}

/// Ends the process after a fatal line has been written.
pub trait ProcessTerminator: Send + Sync {
    fn terminate(&self, code: i32);
}

/// Calls [`std::process::exit`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ExitProcess;

impl ProcessTerminator for ExitProcess {
    fn terminate(&self, code: i32) {
        std::process::exit(code);
    }
}

/// Records exit requests instead of acting on them.
#[derive(Debug, Clone, Default)]
pub struct RecordingTerminator {
    codes: Arc<Mutex<Vec<i32>>>,
}

impl RecordingTerminator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exit codes requested so far, oldest first.
    pub fn codes(&self) -> Vec<i32> {
        self.codes.lock().clone()
    }
}

impl ProcessTerminator for RecordingTerminator {
    fn terminate(&self, code: i32) {
        self.codes.lock().push(code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_stack_trace() {
        assert_eq!(NoStackTrace.capture(), None);
    }

    #[test]
    fn test_captured_backtrace_ends_with_newline() {
        let trace = CapturedBacktrace.capture();
        assert!(trace.is_some());
        assert!(trace.unwrap().ends_with('\n'));
    }

    #[test]
    fn test_recording_terminator_shares_state_between_clones() {
        let terminator = RecordingTerminator::new();
        let clone = terminator.clone();

        clone.terminate(EXIT_FAILURE);
        clone.terminate(3);

        assert_eq!(terminator.codes(), vec![1, 3]);
    }
}
