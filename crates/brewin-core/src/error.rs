//! The four-kind error taxonomy described in spec §7.
//!
//! All four kinds are terminal to the user program: once one escapes the
//! interpreter it is handed to an [`crate::ErrorSink`] and execution
//! stops. User exceptions (`throw`/`try`) are a separate, catchable
//! control-flow channel and are represented in `brewin-interp` as plain
//! string values, not as a `BrewinError` variant.

use std::fmt;

use crate::Line;

/// Which of the four system error categories a [`BrewinError`] belongs
/// to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// AST shape doesn't match any recognized form.
    Syntax,
    /// Assignment/return/operator/input-conversion incompatible with a
    /// declared type; duplicate class/template; unknown class used in a
    /// declaration.
    Type,
    /// Identifier, field, method, or parameter not found; duplicate
    /// field/method/parameter/local; uncaught `exception` access.
    Name,
    /// Null dereference, uncaught user exception reaching the program
    /// top, or division/modulo by zero.
    Fault,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::Syntax => "SYNTAX",
            ErrorKind::Type => "TYPE",
            ErrorKind::Name => "NAME",
            ErrorKind::Fault => "FAULT",
        };
        f.write_str(s)
    }
}

/// A terminal, user-visible interpreter error: one of the four system
/// kinds, a human-readable message, and the source line of the AST node
/// that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message} (line {line})")]
pub struct BrewinError {
    pub kind: ErrorKind,
    pub message: String,
    pub line: Line,
}

impl BrewinError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, line: Line) -> Self {
        Self { kind, message: message.into(), line }
    }

    pub fn syntax(message: impl Into<String>, line: Line) -> Self {
        Self::new(ErrorKind::Syntax, message, line)
    }

    pub fn type_error(message: impl Into<String>, line: Line) -> Self {
        Self::new(ErrorKind::Type, message, line)
    }

    pub fn name_error(message: impl Into<String>, line: Line) -> Self {
        Self::new(ErrorKind::Name, message, line)
    }

    pub fn fault(message: impl Into<String>, line: Line) -> Self {
        Self::new(ErrorKind::Fault, message, line)
    }
}

/// Convenience alias used throughout `brewin-interp`.
pub type BrewinResult<T> = Result<T, BrewinError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_spec_kind_names() {
        assert_eq!(ErrorKind::Syntax.to_string(), "SYNTAX");
        assert_eq!(ErrorKind::Type.to_string(), "TYPE");
        assert_eq!(ErrorKind::Name.to_string(), "NAME");
        assert_eq!(ErrorKind::Fault.to_string(), "FAULT");
    }

    #[test]
    fn error_message_includes_line() {
        let err = BrewinError::type_error("bad assignment", 42);
        assert_eq!(err.to_string(), "TYPE: bad assignment (line 42)");
    }
}
