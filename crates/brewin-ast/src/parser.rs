//! Builds a nested [`Node`] tree out of the flat token stream from
//! [`crate::lexer`], arena-allocating every list as it closes.

use bumpalo::Bump;
use bumpalo::collections::Vec as BumpVec;
use thiserror::Error;

use crate::lexer::{self, RawKind, RawToken};
use crate::node::{Line, Node, Token};

/// Failure to tokenize or parse a Brewin program's surface syntax.
///
/// This is the tokenizer/parser's own error type; it is intentionally
/// separate from `brewin-core::BrewinError` because the parser is an
/// external collaborator to the interpreter core (see spec §1) and must
/// not depend on it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("at line {line}: unterminated string literal")]
    UnterminatedString { line: Line },
    #[error("at line {line}: unexpected ')' with no matching '('")]
    UnmatchedRParen { line: Line },
    #[error("unexpected end of input: {open_count} unclosed '(' starting at line {first_open_line}")]
    UnclosedParen { open_count: usize, first_open_line: Line },
}

/// Parses Brewin source text into a sequence of top-level forms.
pub struct Parser;

impl Parser {
    /// Parse `source` into the top-level forms of a Brewin program.
    ///
    /// The returned slice and all nodes it contains are allocated out of
    /// `arena`; the caller supplies the arena so parsed programs can
    /// outlive this call without an owning copy, the same convention
    /// `brewin-ast`'s teacher crate uses for its own AST.
    pub fn parse<'ast>(source: &str, arena: &'ast Bump) -> Result<&'ast [Node<'ast>], ParseError> {
        let raw = lexer::tokenize(source).map_err(|e| ParseError::UnterminatedString { line: e.line })?;
        let mut pos = 0usize;
        let mut top_level: BumpVec<'ast, Node<'ast>> = BumpVec::new_in(arena);

        while pos < raw.len() {
            let node = parse_node(&raw, &mut pos, arena)?;
            top_level.push(node);
        }

        Ok(top_level.into_bump_slice())
    }
}

fn parse_node<'ast, 'src>(
    raw: &[RawToken<'src>],
    pos: &mut usize,
    arena: &'ast Bump,
) -> Result<Node<'ast>, ParseError> {
    let tok = raw[*pos];
    match tok.kind {
        RawKind::RParen => Err(ParseError::UnmatchedRParen { line: tok.line }),
        RawKind::Atom => {
            *pos += 1;
            let text = arena.alloc_str(tok.text);
            Ok(Node::Atom(Token::new(text, tok.line)))
        }
        RawKind::LParen => {
            let open_line = tok.line;
            *pos += 1;
            let mut children: BumpVec<'ast, Node<'ast>> = BumpVec::new_in(arena);
            loop {
                if *pos >= raw.len() {
                    return Err(ParseError::UnclosedParen { open_count: 1, first_open_line: open_line });
                }
                if raw[*pos].kind == RawKind::RParen {
                    *pos += 1;
                    break;
                }
                children.push(parse_node(raw, pos, arena)?);
            }
            Ok(Node::List(children.into_bump_slice()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_lists() {
        let arena = Bump::new();
        let forms = Parser::parse("(class main (method void main () (print 1)))", &arena).unwrap();
        assert_eq!(forms.len(), 1);
        let class_form = forms[0].as_list().unwrap();
        assert_eq!(class_form[0].text(), Some("class"));
        assert_eq!(class_form[1].text(), Some("main"));
    }

    #[test]
    fn parses_multiple_top_level_forms() {
        let arena = Bump::new();
        let forms = Parser::parse("(class a)\n(class b)", &arena).unwrap();
        assert_eq!(forms.len(), 2);
    }

    #[test]
    fn unmatched_rparen_errors() {
        let arena = Bump::new();
        let err = Parser::parse("(class main))", &arena).unwrap_err();
        assert!(matches!(err, ParseError::UnmatchedRParen { .. }));
    }

    #[test]
    fn unclosed_paren_errors() {
        let arena = Bump::new();
        let err = Parser::parse("(class main", &arena).unwrap_err();
        assert!(matches!(err, ParseError::UnclosedParen { .. }));
    }

    #[test]
    fn empty_program_parses_to_no_forms() {
        let arena = Bump::new();
        let forms = Parser::parse("", &arena).unwrap();
        assert!(forms.is_empty());
    }

    #[test]
    fn bare_atom_top_level_is_its_own_form() {
        let arena = Bump::new();
        let forms = Parser::parse("true", &arena).unwrap();
        assert_eq!(forms.len(), 1);
        assert_eq!(forms[0].text(), Some("true"));
    }
}
