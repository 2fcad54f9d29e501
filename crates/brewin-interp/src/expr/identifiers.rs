//! Identifier resolution and assignment (spec §4.6): innermost lexical
//! frame outward, then the current method's parameters, then the
//! receiver's fields.

use brewin_core::{BrewinError, Line};

use crate::ctx::{Ctx, EvalResult};
use crate::value::Value;

pub fn eval_identifier<'ast>(ctx: &mut Ctx<'_, 'ast>, name: &str, line: Line) -> EvalResult<Value> {
    if let Some(var) = ctx.frames.get(name) {
        return Ok(var.get());
    }
    if let Some(var) = ctx.params.get(name) {
        return Ok(var.get());
    }
    if let Some(var) = ctx.me.0.borrow().fields.get(name) {
        return Ok(var.get());
    }
    Err(undefined(name, line))
}

/// `exception` (spec §4.6) is only meaningful while a `catch` handler is
/// executing; outside one it's a NAME error like any other unresolved
/// identifier.
pub fn eval_exception<'ast>(ctx: &mut Ctx<'_, 'ast>, line: Line) -> EvalResult<Value> {
    match &ctx.exception {
        Some(s) => Ok(Value::str(s.clone())),
        None => Err(BrewinError::name_error("'exception' is not bound outside a catch handler", line).into()),
    }
}

/// Resolves `name` the same way [`eval_identifier`] does, but for
/// assignment (`set`, `inputi`, `inputs`): the first matching slot in
/// frame/param/field order is updated in place.
pub fn assign<'ast>(ctx: &mut Ctx<'_, 'ast>, name: &str, value: Value, line: Line) -> EvalResult<()> {
    if let Some(var) = ctx.frames.get_mut(name) {
        var.set(ctx.registry, value, line)?;
        return Ok(());
    }
    if let Some(var) = ctx.params.get_mut(name) {
        var.set(ctx.registry, value, line)?;
        return Ok(());
    }
    if ctx.me.0.borrow().fields.contains_key(name) {
        ctx.me.0.borrow_mut().fields.get_mut(name).unwrap().set(ctx.registry, value, line)?;
        return Ok(());
    }
    Err(undefined(name, line))
}

fn undefined(name: &str, line: Line) -> crate::ctx::Unwind {
    BrewinError::name_error(format!("undefined identifier '{name}'"), line).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::Instance;
    use crate::registry::ClassRegistry;
    use crate::scope::FrameChain;
    use crate::value::ObjectRef;
    use crate::variable::Variable;
    use bumpalo::Bump;
    use brewin_core::{CapturedOutput, InputSource, OutputSink, QueuedInput};

    #[derive(Default)]
    struct TestHost {
        input: QueuedInput,
        output: CapturedOutput,
    }

    impl InputSource for TestHost {
        fn next_input(&mut self) -> Option<String> {
            self.input.next_input()
        }
    }

    impl OutputSink for TestHost {
        fn emit(&mut self, line: &str) {
            self.output.emit(line)
        }
    }

    fn test_ctx<'a, 'ast>(registry: &'a mut ClassRegistry<'ast>, host: &'a mut TestHost) -> Ctx<'a, 'ast> {
        Ctx {
            registry,
            me: ObjectRef::new(Instance::new("main")),
            defining_class: "main".to_string(),
            params: Default::default(),
            frames: FrameChain::new(),
            host,
            depth: 0,
            exception: None,
        }
    }

    #[test]
    fn exception_unbound_outside_catch_is_name_error() {
        let arena = Bump::new();
        let mut registry = ClassRegistry::new(&arena);
        let mut host = TestHost::default();
        let mut ctx = test_ctx(&mut registry, &mut host);
        let err = eval_exception(&mut ctx, 1).unwrap_err();
        match err {
            crate::ctx::Unwind::Error(e) => assert_eq!(e.kind, brewin_core::ErrorKind::Name),
            _ => panic!("expected an Unwind::Error"),
        }
    }

    #[test]
    fn undefined_identifier_is_name_error() {
        let arena = Bump::new();
        let mut registry = ClassRegistry::new(&arena);
        let mut host = TestHost::default();
        let mut ctx = test_ctx(&mut registry, &mut host);
        assert!(eval_identifier(&mut ctx, "nope", 1).is_err());
    }
}
