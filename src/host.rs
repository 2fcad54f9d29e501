//! Real stdin/stdout/stderr host collaborators (spec §6), mirroring the
//! input/output/error separation the teacher draws between its engine
//! and `angelscript-addons::debugger::DebuggerIO`.

use std::io::{self, BufRead, Write};

use brewin_core::{ErrorKind, ErrorSink, InputSource, Line, OutputSink};

/// Reads one line at a time from the process's stdin, writes program
/// output to stdout, and reports terminal errors on stderr.
#[derive(Debug, Default)]
pub struct StdIo;

impl StdIo {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for StdIo {
    fn next_input(&mut self) -> Option<String> {
        let mut buf = String::new();
        let n = io::stdin().lock().read_line(&mut buf).ok()?;
        if n == 0 {
            return None;
        }
        Some(buf.trim_end_matches(['\n', '\r']).to_string())
    }
}

impl OutputSink for StdIo {
    fn emit(&mut self, line: &str) {
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{line}");
    }
}

impl ErrorSink for StdIo {
    fn fail(&mut self, kind: ErrorKind, message: &str, line: Line) {
        eprintln!("{kind}: {message} (line {line})");
    }
}
