use std::fmt;

/// A runtime value.
///
/// Numbers carry an `is_float` flag alongside the `f64` payload so that
/// integral and fractional values render differently and arithmetic can
/// widen: any float operand makes the result a float, and division always
/// produces a float.
#[derive(Debug, Clone)]
pub enum Value {
    Number(f64, bool),
    String(String),
    Boolean(bool),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(left, _), Value::Number(right, _)) => left == right,
            (Value::String(left), Value::String(right)) => left == right,
            (Value::Boolean(left), Value::Boolean(right)) => left == right,
            _ => false,
        }
    }
}

impl Value {
    pub fn int(n: i64) -> Self {
        Value::Number(n as f64, false)
    }

    pub fn float(n: f64) -> Self {
        Value::Number(n, true)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_, false) => "int",
            Value::Number(_, true) => "float",
            Value::String(_) => "string",
            Value::Boolean(_) => "boolean",
        }
    }

    /// Truthiness for `if`/`while` conditions: nonzero numbers and non-empty
    /// strings are true, booleans are themselves.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Number(n, _) => *n != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::Boolean(b) => *b,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n, true) => {
                let formatted = n.to_string();
                if formatted.contains('.') || formatted.contains('e') || formatted.contains('E') {
                    write!(f, "{}", formatted)
                } else {
                    write!(f, "{}.0", formatted)
                }
            }
            Value::Number(n, false) => write!(f, "{:.0}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Boolean(b) => write!(f, "{}", if *b { "true" } else { "false" }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_rendering() {
        assert_eq!(Value::int(0).to_string(), "0");
        assert_eq!(Value::int(935).to_string(), "935");
        assert_eq!(Value::int(-75).to_string(), "-75");
    }

    #[test]
    fn test_float_rendering() {
        assert_eq!(Value::float(5.09).to_string(), "5.09");
        assert_eq!(Value::float(-3.76).to_string(), "-3.76");
        assert_eq!(Value::float(3.0).to_string(), "3.0");
        assert_eq!(Value::float(-1.0).to_string(), "-1.0");
    }

    #[test]
    fn test_boolean_rendering() {
        assert_eq!(Value::Boolean(true).to_string(), "true");
        assert_eq!(Value::Boolean(false).to_string(), "false");
    }

    #[test]
    fn test_mixed_numeric_equality() {
        assert_eq!(Value::int(1), Value::float(1.0));
        assert_ne!(Value::int(1), Value::float(1.5));
    }

    #[test]
    fn test_cross_type_inequality() {
        assert_ne!(Value::String("1".into()), Value::int(1));
        assert_ne!(Value::Boolean(true), Value::int(1));
    }

    #[test]
    fn test_truthiness() {
        assert!(Value::int(1).is_truthy());
        assert!(Value::float(0.1).is_truthy());
        assert!(!Value::int(0).is_truthy());
        assert!(!Value::float(0.0).is_truthy());
        assert!(Value::String("x".into()).is_truthy());
        assert!(!Value::String(String::new()).is_truthy());
        assert!(Value::Boolean(true).is_truthy());
        assert!(!Value::Boolean(false).is_truthy());
    }
}
