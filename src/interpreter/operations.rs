use super::error::{OperationNotSupported, RuntimeError};
use crate::ast::BinaryOp;
use crate::value::Value;

/// Compute the result of a binary operator over two runtime values.
///
/// Rules are checked in order; the first match wins. Mixed int/float
/// arithmetic widens to float, and division always yields a float.
/// Booleans only take part in `==`/`!=` against other booleans.
pub fn apply(operator: BinaryOp, left: &Value, right: &Value) -> Result<Value, RuntimeError> {
    use BinaryOp::*;
    use Value::*;

    match (operator, left, right) {
        // Equality: same runtime type, or mixed numeric subtypes. Value's
        // PartialEq already compares numbers by numeric value regardless of
        // the float flag.
        (Eq, l, r) if comparable(l, r) => Ok(Boolean(l == r)),
        (NotEq, l, r) if comparable(l, r) => Ok(Boolean(l != r)),

        // Ordering: numbers only.
        (Less, Number(l, _), Number(r, _)) => Ok(Boolean(l < r)),
        (LessEq, Number(l, _), Number(r, _)) => Ok(Boolean(l <= r)),
        (Greater, Number(l, _), Number(r, _)) => Ok(Boolean(l > r)),
        (GreaterEq, Number(l, _), Number(r, _)) => Ok(Boolean(l >= r)),

        // Arithmetic, plus the two string forms of `+` and `-`.
        (Add, Number(l, lf), Number(r, rf)) => Ok(Number(l + r, *lf || *rf)),
        (Add, String(l), String(r)) => Ok(String(format!("{}{}", l, r))),

        (Sub, Number(l, lf), Number(r, rf)) => Ok(Number(l - r, *lf || *rf)),
        (Sub, String(l), String(r)) => remove_trailing_substring(l, r),

        (Mul, Number(l, lf), Number(r, rf)) => Ok(Number(l * r, *lf || *rf)),
        (Div, Number(l, _), Number(r, _)) => Ok(Number(l / r, true)),

        _ => Err(OperationNotSupported {
            operator,
            left_type: left.type_name(),
            right_type: right.type_name(),
        }
        .into()),
    }
}

fn comparable(left: &Value, right: &Value) -> bool {
    matches!(
        (left, right),
        (Value::Number(..), Value::Number(..))
            | (Value::String(_), Value::String(_))
            | (Value::Boolean(_), Value::Boolean(_))
    )
}

/// String subtraction removes a trailing substring; the right operand must
/// actually be a suffix of the left one.
fn remove_trailing_substring(left: &str, right: &str) -> Result<Value, RuntimeError> {
    match left.strip_suffix(right) {
        Some(stripped) => Ok(Value::String(stripped.to_string())),
        None => Err(RuntimeError::TrailingSubstring {
            left: left.to_string(),
            right: right.to_string(),
        }),
    }
}
