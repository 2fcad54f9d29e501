//! Method definitions and inheritance-aware dispatch (spec §4.4, §4.5).
//!
//! The source falls through to a parent class's method by catching
//! broad host-language exceptions around the whole body call, which
//! accidentally masks genuine type errors raised *inside* a method body
//! as if they were dispatch mismatches. [`invoke`] fixes this by
//! classifying failures explicitly: a [`DispatchOutcome::SignatureMismatch`]
//! can only arise from binding formals or checking the return type, never
//! from a failure while the body itself runs — those always propagate as
//! [`Unwind`], terminal and unretried.

use brewin_ast::Node;

use crate::ctx::{exception_to_fault, Ctx, Flow, Host, Unwind, MAX_CALL_DEPTH};
use crate::registry::ClassRegistry;
use crate::stmt;
use crate::types::{check_assignable, DeclaredType};
use crate::value::{ObjectRef, Value};
use brewin_core::{BrewinError, Line};

#[derive(Debug, Clone)]
pub struct Formal {
    pub name: String,
    pub declared_type: DeclaredType,
}

/// `{ name, returnType, formals, body }` (spec §4.5). `body` is a single
/// statement node — typically a `(begin ...)` — shared by every call
/// since the AST is arena-owned and `Node` is `Copy`.
#[derive(Debug, Clone)]
pub struct Method<'ast> {
    pub name: String,
    pub return_type: DeclaredType,
    pub formals: Vec<Formal>,
    pub body: Node<'ast>,
}

/// The result of one class's own attempt at answering a dispatched
/// call: either it ran (successfully or by unwinding through an
/// exception/error), or its signature didn't fit this call at all and
/// the parent should be tried next.
pub enum DispatchOutcome {
    Success(Option<Value>),
    SignatureMismatch,
}

/// Invokes a single method body against already-evaluated arguments.
/// Returns `Err` only for failures that must never be retried on a
/// parent class: a failure while the body itself executes, or the
/// recursion guard tripping.
pub fn invoke<'ast>(
    method: &Method<'ast>,
    registry: &mut ClassRegistry<'ast>,
    host: &mut dyn Host,
    me: ObjectRef,
    defining_class: String,
    args: Vec<Value>,
    depth: u32,
    call_line: Line,
) -> Result<DispatchOutcome, Unwind> {
    if depth >= MAX_CALL_DEPTH {
        return Err(Unwind::Error(BrewinError::fault(
            "exceeded maximum call depth",
            call_line,
        )));
    }
    if args.len() != method.formals.len() {
        return Ok(DispatchOutcome::SignatureMismatch);
    }

    let mut params = rustc_hash::FxHashMap::default();
    for (formal, arg) in method.formals.iter().zip(args.into_iter()) {
        let bound = match crate::variable::Variable::with_declared_type(
            registry,
            formal.name.clone(),
            formal.declared_type.clone(),
            arg,
            call_line,
        ) {
            Ok(v) => v,
            Err(_) => return Ok(DispatchOutcome::SignatureMismatch),
        };
        params.insert(formal.name.clone(), bound);
    }

    let mut ctx = Ctx {
        registry,
        me,
        defining_class,
        params,
        frames: crate::scope::FrameChain::new(),
        host,
        depth: depth + 1,
        exception: None,
    };
    let flow = stmt::eval_stmt(&mut ctx, method.body)?;

    let produced = match flow {
        Flow::Normal => {
            if method.return_type.is_void() {
                None
            } else {
                Some(method.return_type.default_value())
            }
        }
        Flow::Returning(Some(v)) => Some(v),
        Flow::Returning(None) => {
            if method.return_type.is_void() {
                None
            } else {
                Some(method.return_type.default_value())
            }
        }
    };

    match (&method.return_type, produced) {
        (DeclaredType::Void, Some(_)) => Ok(DispatchOutcome::SignatureMismatch),
        (DeclaredType::Void, None) => Ok(DispatchOutcome::Success(None)),
        (_, None) => Ok(DispatchOutcome::Success(Some(method.return_type.default_value()))),
        (_, Some(v)) => match check_assignable(ctx.registry, &method.return_type, &v, call_line) {
            Ok(()) => Ok(DispatchOutcome::Success(Some(v))),
            Err(_) => Ok(DispatchOutcome::SignatureMismatch),
        },
    }
}

/// Walks from `start_class` up through the parent chain looking for a
/// method named `name` whose signature matches `args`, per §4.4's
/// inheritance-as-overload-resolution model. `me` is the receiver bound
/// into every attempted body regardless of which ancestor's definition
/// ultimately answers the call, so `super` dispatch never changes what
/// `me` refers to.
pub fn dispatch<'ast>(
    registry: &mut ClassRegistry<'ast>,
    host: &mut dyn Host,
    me: ObjectRef,
    start_class: &str,
    name: &str,
    args: Vec<Value>,
    depth: u32,
    call_line: Line,
) -> Result<Option<Value>, Unwind> {
    let mut current = Some(start_class.to_string());
    while let Some(class_name) = current {
        let method = registry.lookup_own_method(&class_name, name).cloned();
        if let Some(method) = method {
            match invoke(
                &method,
                registry,
                host,
                me.clone(),
                class_name.clone(),
                args.clone(),
                depth,
                call_line,
            )? {
                DispatchOutcome::Success(v) => return Ok(v),
                DispatchOutcome::SignatureMismatch => {
                    current = registry.parent_of(&class_name);
                }
            }
        } else {
            current = registry.parent_of(&class_name);
        }
    }
    Err(Unwind::Error(BrewinError::name_error(
        format!("no method '{name}' matching this call on '{start_class}' or its ancestors"),
        call_line,
    )))
}

/// Promotes an exception that unwound all the way out of `dispatch`
/// without an enclosing `try` into the terminal `Fault` spec §4.7
/// describes — used only at the program's top-level `main.main` call.
pub fn escalate_uncaught(result: Result<Option<Value>, Unwind>) -> Result<Option<Value>, BrewinError> {
    match result {
        Ok(v) => Ok(v),
        Err(Unwind::Error(e)) => Err(e),
        Err(Unwind::Exception(s, line)) => Err(exception_to_fault(s, line)),
    }
}
