//! `(return [expr])`, `(set var expr)`, and `(throw expr)` (spec §4.7).

use brewin_ast::{Line, Node};
use brewin_core::BrewinError;

use crate::ctx::{Ctx, EvalResult, Flow, Unwind};
use crate::expr::{self, assign};

pub fn eval_return<'ast>(ctx: &mut Ctx<'_, 'ast>, items: &'ast [Node<'ast>], _line: Line) -> EvalResult<Flow> {
    match items.get(1).copied() {
        Some(expr_node) => Ok(Flow::Returning(Some(expr::eval_expr(ctx, expr_node)?))),
        None => Ok(Flow::Returning(None)),
    }
}

pub fn eval_set<'ast>(ctx: &mut Ctx<'_, 'ast>, items: &'ast [Node<'ast>], line: Line) -> EvalResult<Flow> {
    let name = items.get(1).and_then(|n| n.text()).ok_or_else(|| BrewinError::syntax("'set' expects a variable name", line))?;
    let expr_node = items.get(2).copied().ok_or_else(|| BrewinError::syntax("'set' expects a value expression", line))?;
    let value = expr::eval_expr(ctx, expr_node)?;
    assign(ctx, name, value, line)?;
    Ok(Flow::Normal)
}

pub fn eval_throw<'ast>(ctx: &mut Ctx<'_, 'ast>, items: &'ast [Node<'ast>], line: Line) -> EvalResult<Flow> {
    let expr_node = items.get(1).copied().ok_or_else(|| BrewinError::syntax("'throw' expects an expression", line))?;
    let value = expr::eval_expr(ctx, expr_node)?;
    let message = value.as_str().ok_or_else(|| BrewinError::type_error("'throw' requires a string value", line))?.to_string();
    Err(Unwind::Exception(message, line))
}
