//! Literal expressions (spec §4.6): integers, quoted strings, `true`,
//! `false`, and `null`.

use crate::class::Literal;
use crate::value::Value;

/// Recognizes `text` as a literal atom, returning its [`Value`]. `None`
/// means the atom should instead be resolved as an identifier.
pub fn eval_literal(text: &str) -> Option<Value> {
    Literal::parse(text).map(Literal::into_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_int_and_bool_and_null() {
        assert_eq!(eval_literal("42").unwrap().as_int(), Some(42));
        assert_eq!(eval_literal("true").unwrap().as_bool(), Some(true));
        assert!(eval_literal("null").unwrap().is_null());
    }

    #[test]
    fn strips_quotes_from_string_literal() {
        assert_eq!(eval_literal("\"hi there\"").unwrap().as_str(), Some("hi there"));
    }

    #[test]
    fn plain_identifier_is_not_a_literal() {
        assert!(eval_literal("n").is_none());
    }
}
