//! Generic classes (spec §3, §4.8): a template records its ordered
//! type-parameter names and raw member body; compiling it against
//! concrete type arguments substitutes those parameters throughout the
//! body and registers the result as an ordinary class under a mangled
//! name. Memoization itself lives in [`crate::registry::ClassRegistry`]
//! — it is just a map lookup against the mangled name before
//! recompiling, not a separate cache structure.

pub mod substitution;

use brewin_ast::Node;

use crate::types::TYPE_CONCAT_CHAR;

/// `{ name, typeParameters, body }` — the unexpanded template as parsed
/// from `(tclass Name (TypeParam…) Member…)`.
#[derive(Debug, Clone)]
pub struct TemplateDef<'ast> {
    pub name: String,
    pub type_params: Vec<String>,
    pub members: &'ast [Node<'ast>],
}

/// Joins a template name with its concrete type arguments using the
/// type-concatenation character (spec §6), e.g. `box` + `[int]` ->
/// `box@int`.
pub fn mangled_name(name: &str, type_args: &[String]) -> String {
    let mut out = name.to_string();
    for arg in type_args {
        out.push(TYPE_CONCAT_CHAR);
        out.push_str(arg);
    }
    out
}
