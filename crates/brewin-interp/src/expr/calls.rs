//! `(call target method arg…)` (spec §4.4, §4.6): evaluates the target
//! to an object — or resolves `super` structurally — evaluates
//! arguments left to right, then dispatches per the inheritance-as-
//! overload-resolution model.

use brewin_ast::{Line, Node};
use brewin_core::BrewinError;

use crate::ctx::{Ctx, EvalResult};
use crate::method;
use crate::value::{ObjectRef, Value};

/// Evaluates a call expression, requiring it to produce a value — using
/// a `void` method's call as an expression is a TYPE error (spec §4.6).
pub fn eval_call<'ast>(ctx: &mut Ctx<'_, 'ast>, items: &'ast [Node<'ast>], line: Line) -> EvalResult<Value> {
    match eval_call_discarding(ctx, items, line)? {
        Some(v) => Ok(v),
        None => Err(BrewinError::type_error("call used as an expression produced no value", line).into()),
    }
}

/// As [`eval_call`], but keeps the `Option` — the statement evaluator
/// discards the return value either way, so a `void` result is fine
/// there.
pub fn eval_call_discarding<'ast>(
    ctx: &mut Ctx<'_, 'ast>,
    items: &'ast [Node<'ast>],
    line: Line,
) -> EvalResult<Option<Value>> {
    let target = items.get(1).copied().ok_or_else(|| BrewinError::syntax("'call' expects a target", line))?;
    let method_name = items
        .get(2)
        .and_then(|n| n.text())
        .ok_or_else(|| BrewinError::syntax("'call' expects a method name", line))?;

    let (me, start_class) = resolve_target(ctx, target, line)?;

    let mut args = Vec::with_capacity(items.len().saturating_sub(3));
    for arg_node in &items[3..] {
        args.push(super::eval_expr(ctx, *arg_node)?);
    }

    method::dispatch(ctx.registry, ctx.host, me, &start_class, method_name, args, ctx.depth, line)
}

/// `super` is recognized structurally at the call site rather than as a
/// value a standalone `super` expression could produce. It starts
/// dispatch at the *current method's defining class's parent* while
/// keeping `me` as the original receiver, so a `super` call inside an
/// overridden method still virtually dispatches relative to the
/// receiver that was first called (spec §4.4).
fn resolve_target<'ast>(ctx: &mut Ctx<'_, 'ast>, target: Node<'ast>, line: Line) -> EvalResult<(ObjectRef, String)> {
    if target.text() == Some("super") {
        let parent = ctx.registry.parent_of(&ctx.defining_class).ok_or_else(|| {
            BrewinError::name_error(format!("class '{}' has no parent for 'super'", ctx.defining_class), line)
        })?;
        return Ok((ctx.me.clone(), parent));
    }
    let value = super::eval_expr(ctx, target)?;
    match value.as_object() {
        Some(obj) => Ok((obj.clone(), obj.class_name())),
        None => Err(BrewinError::fault("cannot call a method on null", line).into()),
    }
}
