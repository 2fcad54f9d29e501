//! Raw tokenization: splits source text into `(`, `)`, and atom tokens,
//! tracking the line each one came from. Quoted strings are tokenized
//! whole, including their surrounding quotes; a `#` outside of a string
//! introduces a line comment.

use crate::node::Line;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawKind {
    LParen,
    RParen,
    Atom,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct RawToken<'src> {
    pub kind: RawKind,
    pub text: &'src str,
    pub line: Line,
}

pub(crate) fn tokenize(source: &str) -> Result<Vec<RawToken<'_>>, UnterminatedString> {
    let mut tokens = Vec::new();
    for (line_idx, raw_line) in source.lines().enumerate() {
        let line = (line_idx + 1) as Line;
        tokenize_line(raw_line, line, &mut tokens)?;
    }
    Ok(tokens)
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct UnterminatedString {
    pub line: Line,
}

fn tokenize_line<'src>(
    line_src: &'src str,
    line: Line,
    out: &mut Vec<RawToken<'src>>,
) -> Result<(), UnterminatedString> {
    let bytes = line_src.as_bytes();
    let mut i = 0usize;
    while i < bytes.len() {
        let c = bytes[i];
        match c {
            b' ' | b'\t' | b'\r' => {
                i += 1;
            }
            b'#' => break, // rest of the line is a comment
            b'(' => {
                out.push(RawToken { kind: RawKind::LParen, text: &line_src[i..i + 1], line });
                i += 1;
            }
            b')' => {
                out.push(RawToken { kind: RawKind::RParen, text: &line_src[i..i + 1], line });
                i += 1;
            }
            b'"' => {
                let start = i;
                i += 1;
                while i < bytes.len() && bytes[i] != b'"' {
                    i += 1;
                }
                if i >= bytes.len() {
                    return Err(UnterminatedString { line });
                }
                i += 1; // consume closing quote
                out.push(RawToken { kind: RawKind::Atom, text: &line_src[start..i], line });
            }
            _ => {
                let start = i;
                while i < bytes.len() {
                    match bytes[i] {
                        b' ' | b'\t' | b'\r' | b'(' | b')' | b'#' => break,
                        _ => i += 1,
                    }
                }
                out.push(RawToken { kind: RawKind::Atom, text: &line_src[start..i], line });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<RawKind> {
        tokenize(src).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn splits_parens_and_atoms() {
        let toks = tokenize("(class main (field int n 0))").unwrap();
        assert_eq!(toks.first().unwrap().kind, RawKind::LParen);
        assert_eq!(toks.last().unwrap().kind, RawKind::RParen);
        assert!(toks.iter().any(|t| t.text == "class"));
    }

    #[test]
    fn quoted_string_is_one_token() {
        let toks = tokenize(r#"(print "hello world")"#).unwrap();
        let quoted = toks.iter().find(|t| t.text.starts_with('"')).unwrap();
        assert_eq!(quoted.text, r#""hello world""#);
    }

    #[test]
    fn comment_is_stripped() {
        let toks = tokenize("(print 1) # trailing note").unwrap();
        assert!(!toks.iter().any(|t| t.text.contains("trailing")));
    }

    #[test]
    fn unterminated_string_is_an_error() {
        let err = tokenize(r#"(print "oops)"#).unwrap_err();
        assert_eq!(err.line, 1);
    }

    #[test]
    fn tracks_line_numbers() {
        let toks = tokenize("(class main\n  (field int n 0))").unwrap();
        let n_tok = toks.iter().find(|t| t.text == "n").unwrap();
        assert_eq!(n_tok.line, 2);
        assert_eq!(kinds("()"), vec![RawKind::LParen, RawKind::RParen]);
    }
}
