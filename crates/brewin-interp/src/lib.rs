//! The Brewin interpreter engine (spec §2): class/template registry,
//! typed variables, lexical frames, method dispatch, and the
//! expression/statement evaluators. Consumes an already-parsed AST from
//! `brewin-ast` — the tokenizer/parser is an external collaborator this
//! crate never invokes directly except through [`run_source`]'s
//! convenience wrapper.

pub mod class;
pub mod ctx;
pub mod expr;
pub mod method;
pub mod registry;
pub mod scope;
pub mod stmt;
pub mod template;
pub mod types;
pub mod value;
pub mod variable;

use bumpalo::Bump;

use brewin_ast::{Node, ParseError, Parser};
use brewin_core::BrewinError;

use crate::ctx::Host;
use crate::registry::ClassRegistry;
use crate::value::Value;

/// Parses `source`, loads its classes and templates, and invokes
/// `main.main` with zero arguments (spec §4.1).
pub fn run_source(source: &str, host: &mut dyn Host) -> Result<Option<Value>, BrewinError> {
    let arena = Bump::new();
    let forms = Parser::parse(source, &arena).map_err(map_parse_error)?;
    run_forms(forms, &arena, host)
}

/// As [`run_source`], but for an AST already parsed into `arena` — used
/// by tests that build a program directly with `brewin-ast` rather than
/// through source text.
pub fn run_forms<'ast>(
    forms: &'ast [Node<'ast>],
    arena: &'ast Bump,
    host: &mut dyn Host,
) -> Result<Option<Value>, BrewinError> {
    let mut registry = ClassRegistry::new(arena);
    registry.load_program(forms)?;
    run_main(&mut registry, host)
}

fn run_main<'ast>(registry: &mut ClassRegistry<'ast>, host: &mut dyn Host) -> Result<Option<Value>, BrewinError> {
    if registry.class("main").is_none() {
        return Err(BrewinError::type_error("no class 'main' defined", 0));
    }
    let me = registry.new_instance("main", 0)?;
    let result = method::dispatch(registry, host, me, "main", "main", Vec::new(), 0, 0);
    method::escalate_uncaught(result)
}

fn map_parse_error(e: ParseError) -> BrewinError {
    let message = e.to_string();
    let line = match e {
        ParseError::UnterminatedString { line } => line,
        ParseError::UnmatchedRParen { line } => line,
        ParseError::UnclosedParen { first_open_line, .. } => first_open_line,
    };
    BrewinError::syntax(message, line)
}
