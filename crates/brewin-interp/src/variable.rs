//! The typed variable slot described in spec §4.3.

use brewin_core::{BrewinResult, Line};

use crate::registry::ClassRegistry;
use crate::types::{check_assignable, DeclaredType};
use crate::value::Value;

/// A named, type-annotated cell. The invariant held at every point
/// other than mid-[`Variable::set`] is that `value` is assignable to
/// `declared_type`.
#[derive(Debug, Clone)]
pub struct Variable {
    pub name: String,
    pub declared_type: DeclaredType,
    value: Value,
}

impl Variable {
    /// Creates a new slot, validating `declared_type` against the
    /// registry and `initial` against `declared_type`.
    pub fn create(
        registry: &mut ClassRegistry,
        name: impl Into<String>,
        declared_type_text: &str,
        initial: Value,
        line: Line,
    ) -> BrewinResult<Self> {
        let declared_type = DeclaredType::parse(declared_type_text, registry, line, false)?;
        Self::with_declared_type(registry, name, declared_type, initial, line)
    }

    /// As [`Variable::create`], but for a declared type already parsed
    /// (e.g. a method formal or field, resolved once at class-load
    /// time).
    pub fn with_declared_type(
        registry: &ClassRegistry,
        name: impl Into<String>,
        declared_type: DeclaredType,
        initial: Value,
        line: Line,
    ) -> BrewinResult<Self> {
        let mut var = Variable { name: name.into(), declared_type, value: Value::null() };
        var.set(registry, initial, line)?;
        Ok(var)
    }

    /// Enforces spec §4.2 compatibility, then stores `value` with its
    /// tag overwritten to this slot's declared type.
    pub fn set(&mut self, registry: &ClassRegistry, value: Value, line: Line) -> BrewinResult<()> {
        check_assignable(registry, &self.declared_type, &value, line)?;
        self.value = value.with_tag(self.declared_type.clone());
        Ok(())
    }

    pub fn get(&self) -> Value {
        self.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ClassRegistry;
    use bumpalo::Bump;

    #[test]
    fn create_validates_initial_value() {
        let arena = Bump::new();
        let mut registry = ClassRegistry::new(&arena);
        let var = Variable::create(&mut registry, "n", "int", Value::int(3), 1).unwrap();
        assert_eq!(var.get().as_int(), Some(3));
    }

    #[test]
    fn create_rejects_incompatible_initial() {
        let arena = Bump::new();
        let mut registry = ClassRegistry::new(&arena);
        let err = Variable::create(&mut registry, "n", "int", Value::str("oops"), 1).unwrap_err();
        assert_eq!(err.kind, brewin_core::ErrorKind::Type);
    }

    #[test]
    fn set_overwrites_tag_to_declared_type() {
        let arena = Bump::new();
        let mut registry = ClassRegistry::new(&arena);
        let mut var = Variable::create(&mut registry, "n", "int", Value::int(1), 1).unwrap();
        var.set(&registry, Value::int(2), 1).unwrap();
        assert_eq!(var.declared_type, crate::types::DeclaredType::Int);
    }
}
