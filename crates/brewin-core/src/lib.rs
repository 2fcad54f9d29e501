//! Shared ambient types for the Brewin interpreter: the four-kind error
//! taxonomy and the host collaborator traits the interpreter core is
//! driven through (an input source, an output sink, and an error sink).
//!
//! Everything here is deliberately free of any notion of classes,
//! values, or ASTs — those live in `brewin-interp` and `brewin-ast`
//! respectively. This crate is the thin seam both depend on.

mod error;
mod host;

pub use error::{BrewinError, BrewinResult, ErrorKind};
pub use host::{CapturedError, CapturedOutput, ErrorSink, InputSource, OutputSink, QueuedInput};

/// A 1-based source line number, as threaded through every AST node and
/// every error.
pub type Line = u32;
