//! `(new C)` / `(new T@A@B…)` (spec §4.4, §4.8): allocates an object,
//! compiling the named template instantiation first if needed.

use brewin_ast::{Line, Node};
use brewin_core::BrewinError;

use crate::ctx::{Ctx, EvalResult};
use crate::value::Value;

pub fn eval_new<'ast>(ctx: &mut Ctx<'_, 'ast>, items: &'ast [Node<'ast>], line: Line) -> EvalResult<Value> {
    let class_name = items
        .get(1)
        .and_then(|n| n.text())
        .ok_or_else(|| BrewinError::syntax("'new' expects a class name", line))?;
    let obj = ctx.registry.new_instance(class_name, line)?;
    Ok(Value::object(obj))
}
