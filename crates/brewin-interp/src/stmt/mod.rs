//! Statement evaluation (spec §4.7): executes one statement, producing
//! either normal completion or a [`Flow::Returning`] sentinel that
//! bubbles out through every enclosing statement unchanged.

mod block;
mod control;
mod io_stmt;
mod let_stmt;
mod misc;
mod try_catch;

use brewin_ast::Node;
use brewin_core::BrewinError;

use crate::ctx::{Ctx, EvalResult, Flow};

pub fn eval_stmt<'ast>(ctx: &mut Ctx<'_, 'ast>, node: Node<'ast>) -> EvalResult<Flow> {
    let line = node.line();
    let items = node.as_list().ok_or_else(|| BrewinError::syntax("expected a statement form", line))?;
    let head = items
        .first()
        .and_then(|n| n.text())
        .ok_or_else(|| BrewinError::syntax("expected a statement head", line))?;
    match head {
        "begin" => block::eval_begin(ctx, items, line),
        "call" => {
            crate::expr::eval_call_discarding(ctx, items, line)?;
            Ok(Flow::Normal)
        }
        "if" => control::eval_if(ctx, items, line),
        "while" => control::eval_while(ctx, items, line),
        "inputi" => io_stmt::eval_inputi(ctx, items, line),
        "inputs" => io_stmt::eval_inputs(ctx, items, line),
        "print" => io_stmt::eval_print(ctx, items, line),
        "return" => misc::eval_return(ctx, items, line),
        "set" => misc::eval_set(ctx, items, line),
        "let" => let_stmt::eval_let(ctx, items, line),
        "throw" => misc::eval_throw(ctx, items, line),
        "try" => try_catch::eval_try(ctx, items, line),
        other => Err(BrewinError::syntax(format!("unrecognized statement form '{other}'"), line).into()),
    }
}
