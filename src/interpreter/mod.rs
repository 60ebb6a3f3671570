//! The interpretation pipeline: parsing, scope management and execution.

pub mod control_flow;
pub mod environment;
pub mod error;
pub mod evaluator;
pub mod operations;
pub mod parser;

pub use control_flow::Execution;
pub use environment::{EnvRef, Environment, Function};
pub use error::{OperationNotSupported, RuntimeError};
pub use evaluator::Interpreter;
pub use parser::{Parser, SyntaxError};

use crate::error::Error;
use std::io::Write;

/// Parse a source string and run it, printing to stdout.
pub fn parse_and_run(source: &str) -> Result<(), Error> {
    let program = Parser::new(source)?.parse()?;
    let mut interpreter = Interpreter::new();
    interpreter.run(&program)?;
    Ok(())
}

/// Parse a source string and run it against an arbitrary output sink.
pub fn run_with_output<W: Write>(source: &str, out: W) -> Result<(), Error> {
    let program = Parser::new(source)?.parse()?;
    let mut interpreter = Interpreter::with_output(out);
    interpreter.run(&program)?;
    Ok(())
}
