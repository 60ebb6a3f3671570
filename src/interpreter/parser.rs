use crate::ast::{BinaryOp, Node};
use crate::error::Error;
use crate::lexer::Tokenizer;
use crate::token::{Token, TokenKind};
use log::debug;
use std::mem;
use std::rc::Rc;
use thiserror::Error;

/// Errors raised when the token stream does not match the grammar.
///
/// The parser makes no attempt at recovery: the first mismatch aborts the
/// parse with no partial AST.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("unexpected token (expected '{expected}', got '{found}')")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    #[error("unexpected end of input (expected '{expected}')")]
    UnexpectedEnd { expected: TokenKind },
    #[error("unexpected token '{found}' while parsing '{context}' node")]
    UnexpectedNode {
        found: TokenKind,
        context: &'static str,
    },
    #[error("unexpected end of input while parsing '{context}' node")]
    UnexpectedEndOfInput { context: &'static str },
}

/// The Brine parser.
///
/// Recursive descent over the token stream with exactly one token of
/// lookahead, pulled from the tokenizer on demand.
pub struct Parser<'src> {
    tokenizer: Tokenizer<'src>,
    lookahead: Option<Token>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Result<Self, Error> {
        let mut tokenizer = Tokenizer::new(source);
        let lookahead = tokenizer.next_token()?;
        Ok(Self {
            tokenizer,
            lookahead,
        })
    }

    /// Consume the entire token stream and return the program node.
    pub fn parse(&mut self) -> Result<Node, Error> {
        let mut body = Vec::new();
        while self.lookahead.is_some() {
            body.push(self.statement()?);
        }
        debug!("parsed program with {} top-level statements", body.len());
        Ok(Node::Program { body })
    }

    fn peek(&self) -> Option<TokenKind> {
        self.lookahead.as_ref().map(|t| t.kind)
    }

    fn advance(&mut self) -> Result<Option<Token>, Error> {
        let next = self.tokenizer.next_token()?;
        Ok(mem::replace(&mut self.lookahead, next))
    }

    /// Assert that the lookahead has the expected kind, return it and move on.
    fn consume(&mut self, expected: TokenKind) -> Result<Token, Error> {
        match self.peek() {
            Some(kind) if kind == expected => {
                let token = self.advance()?;
                Ok(token.unwrap_or_else(|| Token::new(expected, "")))
            }
            Some(found) => Err(SyntaxError::UnexpectedToken { expected, found }.into()),
            None => Err(SyntaxError::UnexpectedEnd { expected }.into()),
        }
    }

    fn statement(&mut self) -> Result<Node, Error> {
        match self.peek() {
            Some(TokenKind::Print) => self.print_statement(),
            Some(TokenKind::Let) => self.var_declaration(),
            Some(TokenKind::Func) => self.func_declaration(),
            Some(TokenKind::If) => self.conditional(),
            Some(TokenKind::Identifier) => self.assignment_or_call_statement(),
            Some(TokenKind::LBrace) => self.code_block(),
            Some(TokenKind::While) => self.while_loop(),
            Some(TokenKind::Do) => self.do_while_loop(),
            Some(TokenKind::Return) => self.return_statement(),
            Some(found) => Err(SyntaxError::UnexpectedNode {
                found,
                context: "statement",
            }
            .into()),
            None => Err(SyntaxError::UnexpectedEndOfInput {
                context: "statement",
            }
            .into()),
        }
    }

    fn code_block(&mut self) -> Result<Node, Error> {
        self.consume(TokenKind::LBrace)?;
        let mut body = Vec::new();
        loop {
            match self.peek() {
                Some(TokenKind::RBrace) => break,
                Some(_) => body.push(self.statement()?),
                None => {
                    return Err(SyntaxError::UnexpectedEnd {
                        expected: TokenKind::RBrace,
                    }
                    .into())
                }
            }
        }
        self.consume(TokenKind::RBrace)?;
        Ok(Node::CodeBlock { body })
    }

    fn print_statement(&mut self) -> Result<Node, Error> {
        self.consume(TokenKind::Print)?;
        let value = self.expression()?;
        Ok(Node::Print {
            value: Box::new(value),
        })
    }

    fn var_declaration(&mut self) -> Result<Node, Error> {
        self.consume(TokenKind::Let)?;
        let name = self.identifier_name()?;
        self.consume(TokenKind::Assign)?;
        let value = self.expression()?;
        Ok(Node::VarDeclaration {
            name,
            value: Box::new(value),
        })
    }

    fn func_declaration(&mut self) -> Result<Node, Error> {
        self.consume(TokenKind::Func)?;
        let name = self.identifier_name()?;
        self.consume(TokenKind::LParen)?;

        let mut parameters = Vec::new();
        if self.peek() == Some(TokenKind::Identifier) {
            parameters.push(self.identifier_name()?);
            while self.peek() == Some(TokenKind::Comma) {
                self.consume(TokenKind::Comma)?;
                parameters.push(self.identifier_name()?);
            }
        }

        self.consume(TokenKind::RParen)?;
        let body = self.code_block()?;
        Ok(Node::FuncDeclaration {
            name,
            parameters,
            body: Rc::new(body),
        })
    }

    /// `if` expression, block, then an optional `else` which is either a
    /// chained conditional (`else if ...`) or a plain block. The chained
    /// form nests recursively in the `on_false` slot, which attaches every
    /// `else` to the nearest preceding `if`.
    fn conditional(&mut self) -> Result<Node, Error> {
        self.consume(TokenKind::If)?;
        let condition = self.expression()?;
        let on_true = self.code_block()?;

        let mut on_false = None;
        if self.peek() == Some(TokenKind::Else) {
            self.consume(TokenKind::Else)?;
            let branch = if self.peek() == Some(TokenKind::If) {
                self.conditional()?
            } else {
                self.code_block()?
            };
            on_false = Some(Box::new(branch));
        }

        Ok(Node::Conditional {
            condition: Box::new(condition),
            on_true: Box::new(on_true),
            on_false,
        })
    }

    /// Both assignments and call statements start with an identifier; one
    /// extra token of lookahead after consuming it picks the production.
    fn assignment_or_call_statement(&mut self) -> Result<Node, Error> {
        let name = self.identifier_name()?;

        if self.peek() == Some(TokenKind::Assign) {
            self.consume(TokenKind::Assign)?;
            let value = self.expression()?;
            return Ok(Node::VarAssignment {
                name,
                value: Box::new(value),
            });
        }

        self.func_call(name)
    }

    fn func_call(&mut self, name: String) -> Result<Node, Error> {
        self.consume(TokenKind::LParen)?;

        let mut arguments = Vec::new();
        if self.peek() != Some(TokenKind::RParen) {
            arguments.push(self.expression()?);
            while self.peek() == Some(TokenKind::Comma) {
                self.consume(TokenKind::Comma)?;
                arguments.push(self.expression()?);
            }
        }

        self.consume(TokenKind::RParen)?;
        Ok(Node::FuncCall { name, arguments })
    }

    fn while_loop(&mut self) -> Result<Node, Error> {
        self.consume(TokenKind::While)?;
        let condition = self.expression()?;
        let body = self.code_block()?;
        Ok(Node::While {
            condition: Box::new(condition),
            body: Box::new(body),
        })
    }

    fn do_while_loop(&mut self) -> Result<Node, Error> {
        self.consume(TokenKind::Do)?;
        let body = self.code_block()?;
        self.consume(TokenKind::While)?;
        let condition = self.expression()?;
        Ok(Node::DoWhile {
            condition: Box::new(condition),
            body: Box::new(body),
        })
    }

    fn return_statement(&mut self) -> Result<Node, Error> {
        self.consume(TokenKind::Return)?;
        let value = self.expression()?;
        Ok(Node::Return {
            value: Box::new(value),
        })
    }

    fn expression(&mut self) -> Result<Node, Error> {
        self.low_precedence_expression()
    }

    /// Lowest tier: `+ - == !=`, left-associative.
    fn low_precedence_expression(&mut self) -> Result<Node, Error> {
        const OPERATORS: [TokenKind; 4] = [
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Eq,
            TokenKind::NotEq,
        ];
        self.binary_expression(&OPERATORS, Self::mid_precedence_expression)
    }

    /// Middle tier: `* / < <= > >=`, left-associative.
    fn mid_precedence_expression(&mut self) -> Result<Node, Error> {
        const OPERATORS: [TokenKind; 6] = [
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Less,
            TokenKind::LessEq,
            TokenKind::Greater,
            TokenKind::GreaterEq,
        ];
        self.binary_expression(&OPERATORS, Self::primary_expression)
    }

    /// Left-associative chain of binary operators over a sub-expression
    /// parser: `a op b op c` builds `(a op b) op c`.
    fn binary_expression(
        &mut self,
        operators: &[TokenKind],
        mut sub_expression: impl FnMut(&mut Self) -> Result<Node, Error>,
    ) -> Result<Node, Error> {
        let mut node = sub_expression(self)?;

        while let Some(kind) = self.peek() {
            if !operators.contains(&kind) {
                break;
            }
            self.consume(kind)?;
            let right = sub_expression(self)?;
            node = Node::BinaryExpression {
                operator: binary_op(kind),
                left: Box::new(node),
                right: Box::new(right),
            };
        }

        Ok(node)
    }

    fn primary_expression(&mut self) -> Result<Node, Error> {
        if self.peek() == Some(TokenKind::LParen) {
            self.consume(TokenKind::LParen)?;
            let expression = self.expression()?;
            self.consume(TokenKind::RParen)?;
            return Ok(expression);
        }
        self.value()
    }

    fn value(&mut self) -> Result<Node, Error> {
        match self.peek() {
            Some(TokenKind::String) => {
                let token = self.consume(TokenKind::String)?;
                // Strip the surrounding quote characters; no escapes exist.
                let value = token.text[1..token.text.len() - 1].to_string();
                Ok(Node::StringLiteral { value })
            }
            Some(TokenKind::Number) => {
                let token = self.consume(TokenKind::Number)?;
                Ok(Node::NumericLiteral {
                    value: token.text.parse().unwrap(),
                    is_float: token.text.contains('.'),
                })
            }
            Some(TokenKind::Boolean) => {
                let token = self.consume(TokenKind::Boolean)?;
                Ok(Node::BooleanLiteral {
                    value: token.text == "true",
                })
            }
            Some(TokenKind::Identifier) => {
                let name = self.identifier_name()?;
                if self.peek() == Some(TokenKind::LParen) {
                    self.func_call(name)
                } else {
                    Ok(Node::Identifier { name })
                }
            }
            Some(found) => Err(SyntaxError::UnexpectedNode {
                found,
                context: "value",
            }
            .into()),
            None => Err(SyntaxError::UnexpectedEndOfInput { context: "value" }.into()),
        }
    }

    fn identifier_name(&mut self) -> Result<String, Error> {
        let token = self.consume(TokenKind::Identifier)?;
        Ok(token.text)
    }
}

fn binary_op(kind: TokenKind) -> BinaryOp {
    match kind {
        TokenKind::Eq => BinaryOp::Eq,
        TokenKind::NotEq => BinaryOp::NotEq,
        TokenKind::Less => BinaryOp::Less,
        TokenKind::LessEq => BinaryOp::LessEq,
        TokenKind::Greater => BinaryOp::Greater,
        TokenKind::GreaterEq => BinaryOp::GreaterEq,
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Minus => BinaryOp::Sub,
        TokenKind::Star => BinaryOp::Mul,
        TokenKind::Slash => BinaryOp::Div,
        other => unreachable!("token '{}' is not a binary operator", other),
    }
}
