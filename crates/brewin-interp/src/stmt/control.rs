//! `(if cond then [else])` and `(while cond body)` (spec §4.7).

use brewin_ast::{Line, Node};
use brewin_core::BrewinError;

use crate::ctx::{Ctx, EvalResult, Flow};
use crate::expr;

pub fn eval_if<'ast>(ctx: &mut Ctx<'_, 'ast>, items: &'ast [Node<'ast>], line: Line) -> EvalResult<Flow> {
    let cond_node = items.get(1).copied().ok_or_else(|| BrewinError::syntax("'if' expects a condition", line))?;
    let then_node = items.get(2).copied().ok_or_else(|| BrewinError::syntax("'if' expects a then-branch", line))?;

    let cond = expr::eval_expr(ctx, cond_node)?;
    let truth = cond.as_bool().ok_or_else(|| BrewinError::type_error("'if' condition must be bool", line))?;
    if truth {
        super::eval_stmt(ctx, then_node)
    } else if let Some(else_node) = items.get(3).copied() {
        super::eval_stmt(ctx, else_node)
    } else {
        Ok(Flow::Normal)
    }
}

pub fn eval_while<'ast>(ctx: &mut Ctx<'_, 'ast>, items: &'ast [Node<'ast>], line: Line) -> EvalResult<Flow> {
    let cond_node = items.get(1).copied().ok_or_else(|| BrewinError::syntax("'while' expects a condition", line))?;
    let body_node = items.get(2).copied().ok_or_else(|| BrewinError::syntax("'while' expects a body", line))?;

    loop {
        let cond = expr::eval_expr(ctx, cond_node)?;
        let truth = cond.as_bool().ok_or_else(|| BrewinError::type_error("'while' condition must be bool", line))?;
        if !truth {
            return Ok(Flow::Normal);
        }
        match super::eval_stmt(ctx, body_node)? {
            Flow::Normal => {}
            returning @ Flow::Returning(_) => return Ok(returning),
        }
    }
}
