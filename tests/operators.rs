mod common;

use common::{run_failure, run_source};
use brine::interpreter::RuntimeError;
use brine::Error;

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    assert_eq!(run_source("print 1 + 2 * 3"), "7\n");
    assert_eq!(run_source("print 1 * 2 + 3"), "5\n");
}

#[test]
fn test_same_tier_is_left_associative() {
    assert_eq!(run_source("print 1 - 2 + 3"), "2\n");
    assert_eq!(run_source("print 6 / 2 - 4"), "-1.0\n");
}

#[test]
fn test_parentheses_group_subexpressions() {
    assert_eq!(run_source("print (1 + 2) * 3"), "9\n");
    assert_eq!(run_source("print 2 * (10 - 4)"), "12\n");
}

#[test]
fn test_integer_arithmetic_prints_without_decimal() {
    assert_eq!(run_source("print 2 + 3"), "5\n");
    assert_eq!(run_source("print 4 * -2"), "-8\n");
}

#[test]
fn test_float_operand_widens_result() {
    assert_eq!(run_source("print 2 + 0.5"), "2.5\n");
    assert_eq!(run_source("print 1.5 * 2"), "3.0\n");
}

#[test]
fn test_division_always_produces_float() {
    assert_eq!(run_source("print 6 / 2"), "3.0\n");
    assert_eq!(run_source("print 7 / 2"), "3.5\n");
}

#[test]
fn test_numeric_comparisons() {
    let source = r#"
        print 1 < 2
        print 2 <= 2
        print 3 > 4
        print 4 >= 4
    "#;
    assert_eq!(run_source(source), "true\ntrue\nfalse\ntrue\n");
}

#[test]
fn test_equality_spans_numeric_subtypes() {
    assert_eq!(run_source("print 1 == 1.0"), "true\n");
    assert_eq!(run_source("print 1 != 1.5"), "true\n");
}

#[test]
fn test_string_concatenation() {
    assert_eq!(run_source(r#"print "Alpha" + "Beta""#), "AlphaBeta\n");
}

#[test]
fn test_string_truncation_removes_suffix() {
    assert_eq!(run_source(r#"print "AlphaBetaGamma" - "Gamma""#), "AlphaBeta\n");
}

#[test]
fn test_string_truncation_needs_matching_suffix() {
    let err = run_failure(r#"print "AlphaBeta" - "Zeta""#);
    assert!(matches!(
        err,
        Error::Runtime(RuntimeError::TrailingSubstring { .. })
    ));
}

#[test]
fn test_string_equality() {
    assert_eq!(run_source(r#"print "a" == "a""#), "true\n");
    assert_eq!(run_source(r#"print "a" != "b""#), "true\n");
}

#[test]
fn test_boolean_plus_number_is_unsupported() {
    let err = run_failure("print true + 1");
    assert!(matches!(
        err,
        Error::Runtime(RuntimeError::OperationNotSupported(_))
    ));
}

#[test]
fn test_boolean_ordering_is_unsupported() {
    let err = run_failure("print true < 5");
    assert!(matches!(
        err,
        Error::Runtime(RuntimeError::OperationNotSupported(_))
    ));
}

#[test]
fn test_cross_type_equality_is_unsupported() {
    let err = run_failure(r#"print "a" == 7"#);
    assert!(matches!(
        err,
        Error::Runtime(RuntimeError::OperationNotSupported(_))
    ));
}

#[test]
fn test_operators_over_variables() {
    let source = r#"
        let price = 12
        let quantity = 3
        print price * quantity
    "#;
    assert_eq!(run_source(source), "36\n");
}
