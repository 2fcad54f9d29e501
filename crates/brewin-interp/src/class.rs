//! Class definitions and object instances (spec §3, §4.4).
//!
//! Per the teacher's re-architecture note: a [`ClassDef`] is immutable
//! metadata shared by every instance of it, never cloned per-object; an
//! [`Instance`] is a distinct struct holding its class name and an owned
//! map of field values. Method lookup walks the parent chain live via
//! the registry rather than copying inherited methods into each class.

use rustc_hash::FxHashMap;

use crate::method::Method;
use crate::types::DeclaredType;
use crate::value::Value;

/// A literal value attached to a field declaration, evaluated once at
/// class-definition time (not re-evaluated per instance).
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Str(String),
    Bool(bool),
    Null,
}

impl Literal {
    pub fn into_value(self) -> Value {
        match self {
            Literal::Int(n) => Value::int(n),
            Literal::Str(s) => Value::str(s),
            Literal::Bool(b) => Value::bool(b),
            Literal::Null => Value::null(),
        }
    }

    /// Recognizes one atom token as a literal, per spec §4.6/§6: a
    /// quoted string (quotes stripped), `true`/`false`, `null`, or a
    /// decimal integer. Returns `None` for anything else (an
    /// identifier).
    pub fn parse(text: &str) -> Option<Literal> {
        if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
            return Some(Literal::Str(text[1..text.len() - 1].to_string()));
        }
        match text {
            "true" => Some(Literal::Bool(true)),
            "false" => Some(Literal::Bool(false)),
            "null" => Some(Literal::Null),
            _ => text.parse::<i64>().ok().map(Literal::Int),
        }
    }
}

/// One `(field Type name [initial])` declaration.
#[derive(Debug, Clone)]
pub struct FieldDef {
    pub name: String,
    pub declared_type: DeclaredType,
    pub initial: Option<Literal>,
}

impl FieldDef {
    /// The value a fresh field of this schema starts with: its explicit
    /// literal if one was given, else the type's default (spec §4.4).
    pub fn initial_value(&self) -> Value {
        match &self.initial {
            Some(lit) => lit.clone().into_value(),
            None => self.declared_type.default_value(),
        }
    }
}

/// An immutable class definition: its field schema (in declaration
/// order), its own (non-inherited) methods, and its parent's name, if
/// any.
#[derive(Debug)]
pub struct ClassDef<'ast> {
    pub name: String,
    pub parent: Option<String>,
    pub fields: Vec<FieldDef>,
    pub methods: FxHashMap<String, Method<'ast>>,
    /// Set for classes produced by template instantiation (spec §4.8),
    /// used only for diagnostics.
    pub template_origin: Option<String>,
}

impl<'ast> ClassDef<'ast> {
    pub fn new(name: impl Into<String>, parent: Option<String>) -> Self {
        Self {
            name: name.into(),
            parent,
            fields: Vec::new(),
            methods: FxHashMap::default(),
            template_origin: None,
        }
    }
}

/// A runtime object: its class name and its own field values, one
/// [`crate::variable::Variable`] slot per field in the full (own +
/// inherited) field schema.
#[derive(Debug)]
pub struct Instance {
    pub class: String,
    pub fields: FxHashMap<String, crate::variable::Variable>,
}

impl Instance {
    pub fn new(class: impl Into<String>) -> Self {
        Self { class: class.into(), fields: FxHashMap::default() }
    }
}
