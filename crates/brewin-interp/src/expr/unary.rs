//! Unary operators (spec §4.6): `!` is the only one, and only on bool.

use brewin_ast::{Line, Node};
use brewin_core::BrewinError;

use crate::ctx::{Ctx, EvalResult};
use crate::value::Value;

pub fn eval_unary<'ast>(ctx: &mut Ctx<'_, 'ast>, items: &'ast [Node<'ast>], line: Line) -> EvalResult<Value> {
    let operand = items
        .get(1)
        .copied()
        .ok_or_else(|| BrewinError::syntax("'!' expects one operand", line))?;
    let value = super::eval_expr(ctx, operand)?;
    match value.as_bool() {
        Some(b) => Ok(Value::bool(!b)),
        None => Err(BrewinError::type_error("'!' requires a bool operand", line).into()),
    }
}
