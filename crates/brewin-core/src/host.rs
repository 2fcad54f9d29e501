//! Host collaborator traits.
//!
//! The interpreter core never touches `stdin`/`stdout` directly; it is
//! driven through these three traits instead, the same separation the
//! teacher crate draws between its debugger and the engine it drives
//! (`angelscript-addons::debugger::DebuggerIO`). This keeps the core
//! testable without any real I/O and lets embedders supply their own
//! transcript, network socket, or in-memory buffer.

use crate::{ErrorKind, Line};

/// Supplies the next queued input line to `inputi`/`inputs`.
pub trait InputSource {
    /// Returns the next input line, or `None` if no more input is
    /// queued. The interpreter surfaces a missing line as a `Type`
    /// error at the `inputi`/`inputs` call site, per spec §6.
    fn next_input(&mut self) -> Option<String>;
}

/// Receives one line of program output per `print` statement.
pub trait OutputSink {
    fn emit(&mut self, line: &str);
}

/// Terminates execution, carrying the error kind, message, and source
/// line of the failure.
pub trait ErrorSink {
    fn fail(&mut self, kind: ErrorKind, message: &str, line: Line);
}

/// An [`InputSource`] drawing from a fixed, pre-supplied list of lines —
/// handy for tests and for embedding a recorded transcript.
#[derive(Debug, Default, Clone)]
pub struct QueuedInput {
    lines: std::collections::VecDeque<String>,
}

impl QueuedInput {
    pub fn new(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self { lines: lines.into_iter().map(Into::into).collect() }
    }
}

impl InputSource for QueuedInput {
    fn next_input(&mut self) -> Option<String> {
        self.lines.pop_front()
    }
}

/// An [`OutputSink`] that appends each emitted line to an in-memory
/// buffer, for tests that assert on program output.
#[derive(Debug, Default, Clone)]
pub struct CapturedOutput {
    pub lines: Vec<String>,
}

impl OutputSink for CapturedOutput {
    fn emit(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// An [`ErrorSink`] that records the first failure instead of acting on
/// it, for tests that assert on the error kind/line rather than on
/// process exit behavior.
#[derive(Debug, Default, Clone)]
pub struct CapturedError {
    pub failure: Option<(ErrorKind, String, Line)>,
}

impl ErrorSink for CapturedError {
    fn fail(&mut self, kind: ErrorKind, message: &str, line: Line) {
        if self.failure.is_none() {
            self.failure = Some((kind, message.to_string(), line));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queued_input_drains_in_order() {
        let mut input = QueuedInput::new(["5", "hello"]);
        assert_eq!(input.next_input().as_deref(), Some("5"));
        assert_eq!(input.next_input().as_deref(), Some("hello"));
        assert_eq!(input.next_input(), None);
    }

    #[test]
    fn captured_output_records_lines_in_order() {
        let mut out = CapturedOutput::default();
        out.emit("a");
        out.emit("b");
        assert_eq!(out.lines, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn captured_error_keeps_first_failure_only() {
        let mut sink = CapturedError::default();
        sink.fail(ErrorKind::Type, "first", 1);
        sink.fail(ErrorKind::Fault, "second", 2);
        assert_eq!(sink.failure, Some((ErrorKind::Type, "first".to_string(), 1)));
    }
}
