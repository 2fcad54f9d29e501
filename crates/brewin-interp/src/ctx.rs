//! Evaluation context threaded through the expression and statement
//! evaluators: the active registry, receiver, lexical frames, and the
//! host collaborators (spec §6).

use rustc_hash::FxHashMap;

use brewin_core::{BrewinError, ErrorKind, InputSource, Line, OutputSink};

use crate::registry::ClassRegistry;
use crate::scope::FrameChain;
use crate::value::{ObjectRef, Value};
use crate::variable::Variable;

/// A combined host: anything that can both receive input and emit
/// output. The error sink is not part of this trait because only the
/// program loader (spec §4.1's entry point) ever calls it — the
/// evaluator always propagates failures up through [`EvalResult`]
/// instead.
pub trait Host: InputSource + OutputSink {}
impl<T: InputSource + OutputSink> Host for T {}

/// Guards against pathological recursion (spec §5): exceeding this many
/// nested method invocations surfaces as a `Fault` error rather than
/// overflowing the host stack.
pub const MAX_CALL_DEPTH: u32 = 2_000;

/// What a statement did on completion: either it ran through normally,
/// or it hit a `return` carrying an optional value.
#[derive(Debug, Clone)]
pub enum Flow {
    Normal,
    Returning(Option<Value>),
}

/// The two ways evaluation can unwind out of an expression or
/// statement: a terminal system error, or a user exception still
/// looking for a `try` to catch it.
///
/// These are deliberately distinct: an `Unwind::Error` is one of the
/// four kinds from spec §7 and is never caught by `try`; an
/// `Unwind::Exception` is a plain string raised by `throw` and is only
/// ever escalated to a `Fault` error if it reaches the program's top
/// level uncaught (spec §4.7, §8 scenario 5).
#[derive(Debug, Clone)]
pub enum Unwind {
    Error(BrewinError),
    Exception(String, Line),
}

impl From<BrewinError> for Unwind {
    fn from(err: BrewinError) -> Self {
        Unwind::Error(err)
    }
}

pub type EvalResult<T> = Result<T, Unwind>;

/// Promotes an uncaught user exception reaching the program's top level
/// to the `Fault` error spec §4.7 and §8 scenario 5 describe.
pub fn exception_to_fault(exc: String, line: Line) -> BrewinError {
    BrewinError::new(ErrorKind::Fault, format!("uncaught exception: {exc}"), line)
}

/// Everything the expression/statement evaluator needs for one method
/// invocation: the class registry, the receiver object, the name of the
/// class whose method body is currently executing (for `super`
/// resolution), the bound formal parameters, the lexical frame chain,
/// the host, the current recursion depth, and — inside a `catch` block
/// — the exception string bound to the `exception` identifier.
///
/// Identifier resolution (spec §4.6) walks `frames` innermost-first,
/// then `params`, then `me`'s fields — `params` is kept separate from
/// `frames` because a fresh, empty frame stack is what a method
/// invocation starts with (spec §4.5 step 2), while formals live for
/// the whole invocation.
pub struct Ctx<'a, 'ast> {
    pub registry: &'a mut ClassRegistry<'ast>,
    pub me: ObjectRef,
    pub defining_class: String,
    pub params: FxHashMap<String, Variable>,
    pub frames: FrameChain,
    pub host: &'a mut dyn Host,
    pub depth: u32,
    pub exception: Option<String>,
}
