//! AST node definitions.
//!
//! A Brewin program is a sequence of S-expressions. Every leaf is a
//! [`Token`] carrying the 1-based source line it came from; every
//! non-leaf is a [`Node::List`] of sibling nodes. Nodes are arena
//! allocated (see [`crate::Parser::parse`]) so the tree can be walked
//! and re-walked without an owning copy per node.

/// A 1-based source line number.
pub type Line = u32;

/// A single leaf token: its raw text and the line it appeared on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'ast> {
    pub text: &'ast str,
    pub line: Line,
}

impl<'ast> Token<'ast> {
    pub fn new(text: &'ast str, line: Line) -> Self {
        Self { text, line }
    }
}

/// A node in the parsed S-expression tree: either a leaf token or an
/// ordered list of child nodes (one level of parentheses).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'ast> {
    Atom(Token<'ast>),
    List(&'ast [Node<'ast>]),
}

impl<'ast> Node<'ast> {
    /// The line this node starts on: its own line if it's an atom, or
    /// its first child's line if it's a (non-empty) list.
    pub fn line(&self) -> Line {
        match self {
            Node::Atom(tok) => tok.line,
            Node::List(items) => items.first().map(|n| n.line()).unwrap_or(0),
        }
    }

    pub fn as_atom(&self) -> Option<Token<'ast>> {
        match self {
            Node::Atom(tok) => Some(*tok),
            Node::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&'ast [Node<'ast>]> {
        match self {
            Node::Atom(_) => None,
            Node::List(items) => Some(items),
        }
    }

    /// The atom's text, if this node is an atom.
    pub fn text(&self) -> Option<&'ast str> {
        self.as_atom().map(|tok| tok.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atom_line_is_its_own() {
        let atom = Node::Atom(Token::new("main", 3));
        assert_eq!(atom.line(), 3);
        assert_eq!(atom.text(), Some("main"));
    }

    #[test]
    fn list_line_is_first_child() {
        let children = [Node::Atom(Token::new("class", 5)), Node::Atom(Token::new("main", 5))];
        let list = Node::List(&children);
        assert_eq!(list.line(), 5);
        assert!(list.as_list().is_some());
    }

    #[test]
    fn empty_list_line_defaults_zero() {
        let list: Node = Node::List(&[]);
        assert_eq!(list.line(), 0);
    }
}
