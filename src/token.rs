use logos::Logos;
use std::fmt;

/// Token kinds produced by the tokenizer.
///
/// Rule order and priorities matter: keyword patterns win over the generic
/// identifier pattern, `-75` lexes as a single number rather than a minus
/// followed by digits, and whitespace/comments are skipped without producing
/// a token at all.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"/\*([^*]|\*+[^*/])*\*+/")]
#[logos(skip(r"//[^\n]*", allow_greedy = true))]
pub enum TokenKind {
    // Keywords
    #[token("let")]
    Let,
    #[token("func")]
    Func,
    #[token("print")]
    Print,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("do")]
    Do,
    #[token("return")]
    Return,

    // Literals and identifiers
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,
    #[regex(r#""[^"]*""#)]
    String,
    #[token("true")]
    #[token("false")]
    Boolean,
    #[regex(r"[a-z][a-z0-9_]*")]
    Identifier,

    // Operators
    #[token("==")]
    Eq,
    #[token("!=")]
    NotEq,
    #[token("<=")]
    LessEq,
    #[token("<")]
    Less,
    #[token(">=")]
    GreaterEq,
    #[token(">")]
    Greater,
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    // Delimiters
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Let => "let",
            TokenKind::Func => "func",
            TokenKind::Print => "print",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Do => "do",
            TokenKind::Return => "return",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::LessEq => "<=",
            TokenKind::Less => "<",
            TokenKind::GreaterEq => ">=",
            TokenKind::Greater => ">",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Comma => ",",
        };
        write!(f, "{}", name)
    }
}

/// A single token: its kind plus the exact source text it matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.text)
    }
}
