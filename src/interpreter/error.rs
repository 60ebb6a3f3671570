use crate::ast::BinaryOp;
use thiserror::Error;

/// A binary operator applied to a type pair it does not support.
///
/// Kept as its own type (rather than a plain message) so callers can tell
/// "this operation does not exist" apart from other runtime failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("operator '{operator}' does not support the provided operand types '{left_type}' and '{right_type}'")]
pub struct OperationNotSupported {
    pub operator: BinaryOp,
    pub left_type: &'static str,
    pub right_type: &'static str,
}

/// Errors raised while interpreting a parsed program.
///
/// All of these are fatal: interpretation of the whole script stops at the
/// first one.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("tried to declare variable '{0}' which already exists")]
    VariableRedeclared(String),

    #[error("tried to use variable '{0}' which has not been declared")]
    VariableNotDeclared(String),

    #[error("tried to declare function '{0}' which already exists")]
    FunctionRedeclared(String),

    #[error("tried to call function '{0}' which has not been declared")]
    FunctionNotDeclared(String),

    #[error("tried to call function '{name}' with {provided} parameters (expected {expected})")]
    ArityMismatch {
        name: String,
        expected: usize,
        provided: usize,
    },

    #[error("function '{0}' was used as an expression but did not return a value")]
    MissingReturn(String),

    #[error("'return' encountered outside of a function call")]
    ReturnOutsideCall,

    #[error("statement node {0} cannot be evaluated as an expression")]
    NotAnExpression(String),

    #[error("trailing substring '{right}' does not exist in the primary string '{left}'")]
    TrailingSubstring { left: String, right: String },

    #[error(transparent)]
    OperationNotSupported(#[from] OperationNotSupported),

    #[error("failed to write program output")]
    Output(#[from] std::io::Error),
}
