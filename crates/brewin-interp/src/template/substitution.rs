//! AST-level type-parameter substitution (spec §4.8, design notes).
//!
//! Substitution walks leaves, not text: an atom whose entire text
//! matches a type parameter is replaced outright; an atom shaped like a
//! compound type name (`A@B@…`) has each `@`-separated segment
//! substituted independently and rejoined. Lists are rebuilt
//! structurally. Non-matching atoms are returned unchanged (and, being
//! `Copy`, cost nothing to "return" — no fresh allocation happens unless
//! a replacement is actually made somewhere in the subtree).

use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use brewin_ast::{Node, Token};

use crate::types::TYPE_CONCAT_CHAR;
use rustc_hash::FxHashMap;

/// Substitutes every occurrence of a type parameter in `node` with its
/// bound concrete type, allocating any rewritten nodes out of `arena`.
pub fn substitute<'ast>(
    node: Node<'ast>,
    bindings: &FxHashMap<&str, &str>,
    arena: &'ast Bump,
) -> Node<'ast> {
    match node {
        Node::Atom(tok) => substitute_atom(tok, bindings, arena),
        Node::List(items) => {
            let mut out: BumpVec<'ast, Node<'ast>> = BumpVec::with_capacity_in(items.len(), arena);
            for item in items {
                out.push(substitute(*item, bindings, arena));
            }
            Node::List(out.into_bump_slice())
        }
    }
}

fn substitute_atom<'ast>(tok: Token<'ast>, bindings: &FxHashMap<&str, &str>, arena: &'ast Bump) -> Node<'ast> {
    if let Some(replacement) = bindings.get(tok.text) {
        return Node::Atom(Token::new(arena.alloc_str(replacement), tok.line));
    }
    if tok.text.contains(TYPE_CONCAT_CHAR) {
        let segments: Vec<&str> = tok.text.split(TYPE_CONCAT_CHAR).collect();
        let mut changed = false;
        let rewritten: Vec<&str> = segments
            .iter()
            .map(|seg| {
                if let Some(replacement) = bindings.get(seg) {
                    changed = true;
                    *replacement
                } else {
                    *seg
                }
            })
            .collect();
        if changed {
            let joined = rewritten.join(&TYPE_CONCAT_CHAR.to_string());
            return Node::Atom(Token::new(arena.alloc_str(&joined), tok.line));
        }
    }
    Node::Atom(tok)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_bare_type_parameter() {
        let arena = Bump::new();
        let mut bindings = FxHashMap::default();
        bindings.insert("T", "int");
        let node = Node::Atom(Token::new("T", 1));
        let out = substitute(node, &bindings, &arena);
        assert_eq!(out.text(), Some("int"));
    }

    #[test]
    fn rewrites_compound_type_name_segments() {
        let arena = Bump::new();
        let mut bindings = FxHashMap::default();
        bindings.insert("T", "string");
        let node = Node::Atom(Token::new("box@T", 1));
        let out = substitute(node, &bindings, &arena);
        assert_eq!(out.text(), Some("box@string"));
    }

    #[test]
    fn leaves_unrelated_atoms_untouched() {
        let arena = Bump::new();
        let mut bindings = FxHashMap::default();
        bindings.insert("T", "int");
        let node = Node::Atom(Token::new("unrelated", 1));
        let out = substitute(node, &bindings, &arena);
        assert_eq!(out.text(), Some("unrelated"));
    }

    #[test]
    fn recurses_into_lists() {
        let arena = Bump::new();
        let mut bindings = FxHashMap::default();
        bindings.insert("T", "int");
        let children = [Node::Atom(Token::new("field", 1)), Node::Atom(Token::new("T", 1))];
        let node = Node::List(&children);
        let out = substitute(node, &bindings, &arena);
        let list = out.as_list().unwrap();
        assert_eq!(list[1].text(), Some("int"));
    }
}
