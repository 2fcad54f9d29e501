//! `(begin s1 s2 …)` (spec §4.7): runs statements in textual order,
//! propagating a returning sentinel as soon as one appears. An empty
//! `begin` is a SYNTAX error.

use brewin_ast::{Line, Node};
use brewin_core::BrewinError;

use crate::ctx::{Ctx, EvalResult, Flow};

pub fn eval_begin<'ast>(ctx: &mut Ctx<'_, 'ast>, items: &'ast [Node<'ast>], line: Line) -> EvalResult<Flow> {
    let body = &items[1..];
    if body.is_empty() {
        return Err(BrewinError::syntax("'begin' must contain at least one statement", line).into());
    }
    for stmt in body {
        match super::eval_stmt(ctx, *stmt)? {
            Flow::Normal => {}
            returning @ Flow::Returning(_) => return Ok(returning),
        }
    }
    Ok(Flow::Normal)
}
