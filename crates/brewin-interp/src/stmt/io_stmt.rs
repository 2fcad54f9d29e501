//! `(inputi var)`, `(inputs var)`, and `(print expr…)` (spec §4.7):
//! the host collaborator boundary for reading and writing program I/O.

use brewin_ast::{Line, Node};
use brewin_core::{BrewinError, InputSource, OutputSink};

use crate::ctx::{Ctx, EvalResult, Flow};
use crate::expr::{self, assign};
use crate::value::Value;

pub fn eval_inputi<'ast>(ctx: &mut Ctx<'_, 'ast>, items: &'ast [Node<'ast>], line: Line) -> EvalResult<Flow> {
    let name = var_name(items, line)?;
    let raw = ctx.host.next_input().ok_or_else(|| BrewinError::type_error("no input available for 'inputi'", line))?;
    let n: i64 = raw.trim().parse().map_err(|_| BrewinError::type_error(format!("'{raw}' is not a valid int"), line))?;
    assign(ctx, name, Value::int(n), line)?;
    Ok(Flow::Normal)
}

pub fn eval_inputs<'ast>(ctx: &mut Ctx<'_, 'ast>, items: &'ast [Node<'ast>], line: Line) -> EvalResult<Flow> {
    let name = var_name(items, line)?;
    let raw = ctx.host.next_input().ok_or_else(|| BrewinError::type_error("no input available for 'inputs'", line))?;
    assign(ctx, name, Value::str(raw), line)?;
    Ok(Flow::Normal)
}

pub fn eval_print<'ast>(ctx: &mut Ctx<'_, 'ast>, items: &'ast [Node<'ast>], _line: Line) -> EvalResult<Flow> {
    let mut out = String::new();
    for node in &items[1..] {
        let value = expr::eval_expr(ctx, *node)?;
        out.push_str(&value.display());
    }
    ctx.host.emit(&out);
    Ok(Flow::Normal)
}

fn var_name<'ast>(items: &'ast [Node<'ast>], line: Line) -> Result<&'ast str, BrewinError> {
    items.get(1).and_then(|n| n.text()).ok_or_else(|| BrewinError::syntax("expected a variable name", line))
}
