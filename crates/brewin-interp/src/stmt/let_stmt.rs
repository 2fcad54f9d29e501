//! `(let ((T name init?)…) s1 s2 …)` (spec §4.3, §4.7): pushes a new
//! lexical frame, declares each local (defaulting an omitted initializer
//! to its type's default value), runs the body, and pops the frame on
//! every exit path — normal completion, a propagating exception, or a
//! returning sentinel.

use brewin_ast::{Line, Node};
use brewin_core::BrewinError;

use crate::ctx::{Ctx, EvalResult, Flow};
use crate::expr;
use crate::types::DeclaredType;
use crate::variable::Variable;

pub fn eval_let<'ast>(ctx: &mut Ctx<'_, 'ast>, items: &'ast [Node<'ast>], line: Line) -> EvalResult<Flow> {
    let decls = items
        .get(1)
        .and_then(|n| n.as_list())
        .ok_or_else(|| BrewinError::syntax("'let' expects a declaration list", line))?;
    let body = &items[2..];

    ctx.frames.push();
    let result = run_let(ctx, decls, body);
    ctx.frames.pop();
    result
}

fn run_let<'ast>(ctx: &mut Ctx<'_, 'ast>, decls: &'ast [Node<'ast>], body: &'ast [Node<'ast>]) -> EvalResult<Flow> {
    for decl in decls {
        declare_local(ctx, *decl)?;
    }
    for stmt in body {
        match super::eval_stmt(ctx, *stmt)? {
            Flow::Normal => {}
            returning @ Flow::Returning(_) => return Ok(returning),
        }
    }
    Ok(Flow::Normal)
}

fn declare_local<'ast>(ctx: &mut Ctx<'_, 'ast>, decl: Node<'ast>) -> EvalResult<()> {
    let decl_line = decl.line();
    let decl_items = decl.as_list().ok_or_else(|| BrewinError::syntax("expected (Type name init?)", decl_line))?;
    let type_text = decl_items.first().and_then(|n| n.text()).ok_or_else(|| BrewinError::syntax("expected a declared type", decl_line))?;
    let name = decl_items.get(1).and_then(|n| n.text()).ok_or_else(|| BrewinError::syntax("expected a local name", decl_line))?;

    let declared_type: DeclaredType = DeclaredType::parse(type_text, ctx.registry, decl_line, false)?;
    let initial = match decl_items.get(2) {
        Some(init_node) => expr::eval_expr(ctx, *init_node)?,
        None => declared_type.default_value(),
    };
    let var = Variable::with_declared_type(ctx.registry, name, declared_type, initial, decl_line)?;
    if !ctx.frames.declare(var) {
        return Err(BrewinError::name_error(format!("duplicate local '{name}' in this 'let'"), decl_line).into());
    }
    Ok(())
}
