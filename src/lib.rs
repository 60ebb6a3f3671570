pub mod ast;
pub mod cli;
pub mod config;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod token;
pub mod value;

pub use ast::{BinaryOp, Node};
pub use error::Error;
pub use interpreter::{parse_and_run, run_with_output, Interpreter, Parser};
pub use lexer::{tokenize, Tokenizer};
pub use token::{Token, TokenKind};
pub use value::Value;
