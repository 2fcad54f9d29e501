//! Expression evaluation (spec §4.6): a function from one AST node and
//! the active [`Ctx`] to a [`Value`]. Dispatch is purely structural —
//! each form is recognized by its head atom or, for `me`/`super`/
//! `exception`/literals, by the atom's own text.

mod binary;
mod calls;
mod identifiers;
mod literals;
mod new_expr;
mod unary;

use brewin_ast::{Line, Node, Token};
use brewin_core::BrewinError;

use crate::ctx::{Ctx, EvalResult};
use crate::value::Value;

pub use calls::{eval_call, eval_call_discarding};
pub use identifiers::assign;

/// Evaluates one expression node to a [`Value`].
pub fn eval_expr<'ast>(ctx: &mut Ctx<'_, 'ast>, node: Node<'ast>) -> EvalResult<Value> {
    match node {
        Node::Atom(tok) => eval_atom(ctx, tok),
        Node::List(items) => eval_list(ctx, items, node.line()),
    }
}

fn eval_atom<'ast>(ctx: &mut Ctx<'_, 'ast>, tok: Token<'ast>) -> EvalResult<Value> {
    match tok.text {
        "me" => Ok(Value::object(ctx.me.clone())),
        "super" => Err(BrewinError::syntax(
            "'super' may only appear as the target of a 'call'",
            tok.line,
        )
        .into()),
        "exception" => identifiers::eval_exception(ctx, tok.line),
        _ => match literals::eval_literal(tok.text) {
            Some(value) => Ok(value),
            None => identifiers::eval_identifier(ctx, tok.text, tok.line),
        },
    }
}

fn eval_list<'ast>(ctx: &mut Ctx<'_, 'ast>, items: &'ast [Node<'ast>], line: Line) -> EvalResult<Value> {
    let head = items
        .first()
        .and_then(|n| n.text())
        .ok_or_else(|| BrewinError::syntax("expected an expression form", line))?;
    match head {
        "new" => new_expr::eval_new(ctx, items, line),
        "call" => calls::eval_call(ctx, items, line),
        "!" => unary::eval_unary(ctx, items, line),
        _ if binary::is_binary_op(head) => binary::eval_binary(ctx, head, items, line),
        other => Err(BrewinError::syntax(format!("unrecognized expression form '{other}'"), line).into()),
    }
}
