//! Binary operators (spec §4.6): arithmetic and ordering on ints,
//! ordering/concatenation on strings, logical ops on bools, and
//! identity comparison across object references and `null`.

use brewin_ast::{Line, Node};
use brewin_core::BrewinError;

use crate::ctx::{Ctx, EvalResult};
use crate::registry::ClassRegistry;
use crate::types::DeclaredType;
use crate::value::{ObjectRef, Value, ValueKind};

pub fn is_binary_op(head: &str) -> bool {
    matches!(head, "+" | "-" | "*" | "/" | "%" | "<" | ">" | "<=" | ">=" | "!=" | "==" | "&" | "|")
}

pub fn eval_binary<'ast>(
    ctx: &mut Ctx<'_, 'ast>,
    op: &str,
    items: &'ast [Node<'ast>],
    line: Line,
) -> EvalResult<Value> {
    let lhs_node = items.get(1).copied().ok_or_else(|| BrewinError::syntax(format!("'{op}' expects two operands"), line))?;
    let rhs_node = items.get(2).copied().ok_or_else(|| BrewinError::syntax(format!("'{op}' expects two operands"), line))?;
    let lhs = super::eval_expr(ctx, lhs_node)?;
    let rhs = super::eval_expr(ctx, rhs_node)?;

    use ValueKind::*;
    match (op, &lhs.kind, &rhs.kind) {
        ("+", Int(a), Int(b)) => Ok(Value::int(a.wrapping_add(*b))),
        ("-", Int(a), Int(b)) => Ok(Value::int(a.wrapping_sub(*b))),
        ("*", Int(a), Int(b)) => Ok(Value::int(a.wrapping_mul(*b))),
        ("/", Int(a), Int(b)) => checked_div(*a, *b, line),
        ("%", Int(a), Int(b)) => checked_rem(*a, *b, line),
        ("<", Int(a), Int(b)) => Ok(Value::bool(a < b)),
        (">", Int(a), Int(b)) => Ok(Value::bool(a > b)),
        ("<=", Int(a), Int(b)) => Ok(Value::bool(a <= b)),
        (">=", Int(a), Int(b)) => Ok(Value::bool(a >= b)),
        ("==", Int(a), Int(b)) => Ok(Value::bool(a == b)),
        ("!=", Int(a), Int(b)) => Ok(Value::bool(a != b)),

        ("<", Str(a), Str(b)) => Ok(Value::bool(a < b)),
        (">", Str(a), Str(b)) => Ok(Value::bool(a > b)),
        ("<=", Str(a), Str(b)) => Ok(Value::bool(a <= b)),
        (">=", Str(a), Str(b)) => Ok(Value::bool(a >= b)),
        ("==", Str(a), Str(b)) => Ok(Value::bool(a == b)),
        ("!=", Str(a), Str(b)) => Ok(Value::bool(a != b)),
        ("+", Str(a), Str(b)) => Ok(Value::str(format!("{a}{b}"))),

        ("==", Bool(a), Bool(b)) => Ok(Value::bool(a == b)),
        ("!=", Bool(a), Bool(b)) => Ok(Value::bool(a != b)),
        ("&", Bool(a), Bool(b)) => Ok(Value::bool(*a && *b)),
        ("|", Bool(a), Bool(b)) => Ok(Value::bool(*a || *b)),

        ("==", Object(_) | Null, Object(_) | Null) | ("!=", Object(_) | Null, Object(_) | Null) => {
            if !objects_related(ctx.registry, &lhs, &rhs) {
                return Err(BrewinError::type_error(
                    format!("'{op}' requires both sides to be related by inheritance"),
                    line,
                )
                .into());
            }
            let eq = objects_equal(&lhs, &rhs);
            Ok(Value::bool(if op == "==" { eq } else { !eq }))
        }

        _ => Err(BrewinError::type_error(format!("operator '{op}' is not defined for these operand types"), line).into()),
    }
}

fn checked_div(a: i64, b: i64, line: Line) -> EvalResult<Value> {
    if b == 0 {
        return Err(BrewinError::fault("division by zero", line).into());
    }
    Ok(Value::int(a / b))
}

fn checked_rem(a: i64, b: i64, line: Line) -> EvalResult<Value> {
    if b == 0 {
        return Err(BrewinError::fault("modulo by zero", line).into());
    }
    Ok(Value::int(a % b))
}

/// Whether `a` and `b` are related closely enough by inheritance that
/// comparing them with `==`/`!=` is even meaningful (spec §4.6): either
/// is assignable to the other, directly as objects or through a tagged
/// `null`'s declared type.
fn objects_related(registry: &ClassRegistry, a: &Value, b: &Value) -> bool {
    match (&a.kind, &b.kind) {
        (ValueKind::Object(oa), ValueKind::Object(ob)) => {
            let (ca, cb) = (oa.class_name(), ob.class_name());
            registry.is_subclass(&ca, &cb) || registry.is_subclass(&cb, &ca)
        }
        (ValueKind::Object(o), ValueKind::Null) | (ValueKind::Null, ValueKind::Object(o)) => {
            let null_side = if matches!(a.kind, ValueKind::Null) { a } else { b };
            match &null_side.tag {
                Some(DeclaredType::Class(t)) => {
                    let oc = o.class_name();
                    registry.is_subclass(&oc, t) || registry.is_subclass(t, &oc)
                }
                _ => true,
            }
        }
        (ValueKind::Null, ValueKind::Null) => true,
        _ => false,
    }
}

fn objects_equal(a: &Value, b: &Value) -> bool {
    match (&a.kind, &b.kind) {
        (ValueKind::Object(oa), ValueKind::Object(ob)) => ObjectRef::ptr_eq(oa, ob),
        (ValueKind::Null, ValueKind::Null) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_by_zero_is_fault() {
        let err = checked_div(4, 0, 7).unwrap_err();
        match err {
            crate::ctx::Unwind::Error(e) => assert_eq!(e.kind, brewin_core::ErrorKind::Fault),
            _ => panic!("expected Unwind::Error"),
        }
    }

    #[test]
    fn integer_division_truncates() {
        assert_eq!(checked_div(7, 2, 1).unwrap().as_int(), Some(3));
        assert_eq!(checked_div(-7, 2, 1).unwrap().as_int(), Some(-3));
    }
}
