//! The static type system described in spec §4.2: primitive types,
//! class types (including concrete template instantiations), and the
//! method-only `void` type.

use std::fmt;

use brewin_core::{BrewinResult, Line};

use crate::registry::ClassRegistry;
use crate::value::{Value, ValueKind};

pub const TYPE_CONCAT_CHAR: char = '@';

/// A resolved, known-good declared type. Class types are stored by name
/// (either a plain class name or a mangled template instantiation name
/// like `box@int`); resolving the name against the registry happens once,
/// at [`DeclaredType::parse`] time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeclaredType {
    Int,
    Str,
    Bool,
    /// Method-return-only; never valid for a variable slot.
    Void,
    Class(String),
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclaredType::Int => write!(f, "int"),
            DeclaredType::Str => write!(f, "string"),
            DeclaredType::Bool => write!(f, "bool"),
            DeclaredType::Void => write!(f, "void"),
            DeclaredType::Class(name) => write!(f, "{name}"),
        }
    }
}

impl DeclaredType {
    /// Parses and validates a type name against the registry, compiling
    /// any template instantiation it names along the way (spec §4.8).
    ///
    /// `allow_void` should only be set when parsing a method's return
    /// type; a variable, field, or formal parameter may never be `void`.
    pub fn parse(
        text: &str,
        registry: &mut ClassRegistry,
        line: Line,
        allow_void: bool,
    ) -> BrewinResult<DeclaredType> {
        match text {
            "int" => Ok(DeclaredType::Int),
            "string" => Ok(DeclaredType::Str),
            "bool" => Ok(DeclaredType::Bool),
            "void" if allow_void => Ok(DeclaredType::Void),
            "void" => Err(brewin_core::BrewinError::type_error(
                "'void' is not a valid type here",
                line,
            )),
            name => {
                registry.ensure_known_class_type(name, line)?;
                Ok(DeclaredType::Class(name.to_string()))
            }
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, DeclaredType::Void)
    }

    pub fn is_class(&self) -> bool {
        matches!(self, DeclaredType::Class(_))
    }

    /// The default value a field/variable of this type starts with when
    /// nothing else initializes it (spec §4.4).
    pub fn default_value(&self) -> Value {
        match self {
            DeclaredType::Int => Value::int(0),
            DeclaredType::Str => Value::str(""),
            DeclaredType::Bool => Value::bool(false),
            DeclaredType::Void => Value::null(),
            DeclaredType::Class(name) => Value::null_tagged(DeclaredType::Class(name.clone())),
        }
    }
}

/// Checks that `value` is assignable to a slot declared `declared`,
/// per spec §4.2. Returns the incompatibility as a `Type` error.
pub fn check_assignable(
    registry: &ClassRegistry,
    declared: &DeclaredType,
    value: &Value,
    line: Line,
) -> BrewinResult<()> {
    match declared {
        DeclaredType::Int => match value.kind {
            ValueKind::Int(_) => Ok(()),
            _ => Err(kind_mismatch(declared, value, line)),
        },
        DeclaredType::Str => match value.kind {
            ValueKind::Str(_) => Ok(()),
            _ => Err(kind_mismatch(declared, value, line)),
        },
        DeclaredType::Bool => match value.kind {
            ValueKind::Bool(_) => Ok(()),
            _ => Err(kind_mismatch(declared, value, line)),
        },
        DeclaredType::Void => Err(brewin_core::BrewinError::type_error(
            "'void' is not a valid type for a variable slot",
            line,
        )),
        DeclaredType::Class(target) => match &value.kind {
            ValueKind::Null => {
                if let Some(DeclaredType::Class(tag)) = &value.tag {
                    if registry.is_subclass(tag, target) {
                        Ok(())
                    } else {
                        Err(brewin_core::BrewinError::type_error(
                            format!("class {tag} is not derived from {target}"),
                            line,
                        ))
                    }
                } else {
                    Ok(())
                }
            }
            ValueKind::Object(obj) => {
                let actual = obj.class_name();
                if registry.is_subclass(&actual, target) {
                    Ok(())
                } else {
                    Err(brewin_core::BrewinError::type_error(
                        format!("class {actual} is not derived from {target}"),
                        line,
                    ))
                }
            }
            _ => Err(kind_mismatch(declared, value, line)),
        },
    }
}

fn kind_mismatch(declared: &DeclaredType, value: &Value, line: Line) -> brewin_core::BrewinError {
    let got = match &value.kind {
        ValueKind::Int(_) => "int",
        ValueKind::Str(_) => "string",
        ValueKind::Bool(_) => "bool",
        ValueKind::Object(_) => "object",
        ValueKind::Null => "null",
    };
    brewin_core::BrewinError::type_error(
        format!("cannot assign value of type {got} to variable of type {declared}"),
        line,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ClassRegistry;
    use bumpalo::Bump;

    #[test]
    fn primitive_parses_without_registry_lookup() {
        let arena = Bump::new();
        let mut registry = ClassRegistry::new(&arena);
        assert_eq!(DeclaredType::parse("int", &mut registry, 1, false).unwrap(), DeclaredType::Int);
        assert_eq!(DeclaredType::parse("bool", &mut registry, 1, false).unwrap(), DeclaredType::Bool);
    }

    #[test]
    fn void_rejected_outside_return_position() {
        let arena = Bump::new();
        let mut registry = ClassRegistry::new(&arena);
        assert!(DeclaredType::parse("void", &mut registry, 1, false).is_err());
        assert_eq!(DeclaredType::parse("void", &mut registry, 1, true).unwrap(), DeclaredType::Void);
    }

    #[test]
    fn default_values_match_spec() {
        assert_eq!(DeclaredType::Int.default_value().as_int(), Some(0));
        assert_eq!(DeclaredType::Str.default_value().as_str(), Some(""));
        assert_eq!(DeclaredType::Bool.default_value().as_bool(), Some(false));
        assert!(DeclaredType::Class("foo".into()).default_value().is_null());
    }
}
