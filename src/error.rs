use crate::interpreter::parser::SyntaxError;
use crate::interpreter::RuntimeError;
use crate::lexer::LexError;
use thiserror::Error;

/// Any failure the pipeline can produce.
///
/// The three stages are strict gates: a script that fails to tokenize is
/// never parsed, and one that fails to parse is never interpreted.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
