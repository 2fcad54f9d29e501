//! `(try body handler)` (spec §4.7): runs `body`; on an uncaught user
//! exception, binds the exception string to the magic `exception`
//! identifier and runs `handler`. A returning sentinel from either
//! branch propagates to the caller; an exception raised inside
//! `handler` propagates past this `try` to the next enclosing one.

use brewin_ast::{Line, Node};
use brewin_core::BrewinError;

use crate::ctx::{Ctx, EvalResult, Flow, Unwind};

pub fn eval_try<'ast>(ctx: &mut Ctx<'_, 'ast>, items: &'ast [Node<'ast>], line: Line) -> EvalResult<Flow> {
    let body = items.get(1).copied().ok_or_else(|| BrewinError::syntax("'try' expects a body", line))?;
    let handler = items.get(2).copied().ok_or_else(|| BrewinError::syntax("'try' expects a handler", line))?;

    match super::eval_stmt(ctx, body) {
        Ok(flow) => Ok(flow),
        Err(Unwind::Exception(message, _)) => {
            let previous = ctx.exception.replace(message);
            let result = super::eval_stmt(ctx, handler);
            ctx.exception = previous;
            result
        }
        Err(err @ Unwind::Error(_)) => Err(err),
    }
}
