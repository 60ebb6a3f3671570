use crate::value::Value;

/// The outcome of executing a statement.
///
/// `Return` is threaded upward through every enclosing block, conditional
/// and loop until the function-call handler intercepts it; it never crosses
/// a call boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Execution {
    Next,
    Return(Value),
}
