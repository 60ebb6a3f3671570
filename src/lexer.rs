use crate::token::{Token, TokenKind};
use log::debug;
use logos::Logos;
use thiserror::Error;

/// How much unmatched source text to quote in a [`LexError`].
const ERROR_CONTEXT_CHARS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown syntax near characters '{nearby}'")]
pub struct LexError {
    pub nearby: String,
}

/// The Brine tokenizer.
///
/// Performs lexical analysis of the source code, producing tokens on demand.
/// The parser drives it one token at a time; once the source is exhausted
/// every further call yields `Ok(None)`.
pub struct Tokenizer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
    finished: bool,
}

impl<'src> Tokenizer<'src> {
    pub fn new(source: &'src str) -> Self {
        debug!("tokenizer initialised ({} bytes of source)", source.len());
        Self {
            inner: TokenKind::lexer(source),
            finished: false,
        }
    }

    /// Return the next token in the stream, or `None` at end of stream.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        if self.finished {
            return Ok(None);
        }

        match self.inner.next() {
            Some(Ok(kind)) => {
                let token = Token::new(kind, self.inner.slice());
                debug!("tokenizer matched token '{}' of kind '{}'", token.text, token.kind);
                Ok(Some(token))
            }
            Some(Err(())) => {
                let start = self.inner.span().start;
                let nearby: String = self.inner.source()[start..]
                    .chars()
                    .take(ERROR_CONTEXT_CHARS)
                    .collect();
                Err(LexError { nearby })
            }
            None => {
                self.finished = true;
                Ok(None)
            }
        }
    }
}

/// Tokenize an entire source string up front.
///
/// Used by the `--show-tokens` diagnostic output; the parser itself pulls
/// tokens on demand instead.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokenizer = Tokenizer::new(source);
    let mut tokens = Vec::new();
    while let Some(token) = tokenizer.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .expect("lexing failed")
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(lex(""), vec![]);
        assert_eq!(lex("   \n\t  "), vec![]);
    }

    #[test]
    fn test_keywords() {
        assert_eq!(
            lex("let func print if else while do return"),
            vec![
                TokenKind::Let,
                TokenKind::Func,
                TokenKind::Print,
                TokenKind::If,
                TokenKind::Else,
                TokenKind::While,
                TokenKind::Do,
                TokenKind::Return,
            ]
        );
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(lex("letter"), vec![TokenKind::Identifier]);
        assert_eq!(lex("iffy"), vec![TokenKind::Identifier]);
        assert_eq!(lex("println"), vec![TokenKind::Identifier]);
    }

    #[test]
    fn test_numbers() {
        let tokens = tokenize("0 935 -75 3.14 -0.5").unwrap();
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Number));
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["0", "935", "-75", "3.14", "-0.5"]);
    }

    #[test]
    fn test_minus_between_operands_is_an_operator() {
        assert_eq!(
            lex("1 - 2"),
            vec![TokenKind::Number, TokenKind::Minus, TokenKind::Number]
        );
    }

    #[test]
    fn test_strings() {
        let tokens = tokenize(r#""hello" "" "with spaces""#).unwrap();
        assert!(tokens.iter().all(|t| t.kind == TokenKind::String));
        assert_eq!(tokens[0].text, r#""hello""#);
        assert_eq!(tokens[1].text, r#""""#);
    }

    #[test]
    fn test_booleans() {
        let tokens = tokenize("true false").unwrap();
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Boolean));
        assert_eq!(tokens[0].text, "true");
        assert_eq!(tokens[1].text, "false");
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            lex("== != <= < >= > = + - * /"),
            vec![
                TokenKind::Eq,
                TokenKind::NotEq,
                TokenKind::LessEq,
                TokenKind::Less,
                TokenKind::GreaterEq,
                TokenKind::Greater,
                TokenKind::Assign,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
            ]
        );
    }

    #[test]
    fn test_delimiters() {
        assert_eq!(
            lex("{ } ( ) ,"),
            vec![
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Comma,
            ]
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            lex("let x // trailing comment\n= 5"),
            vec![
                TokenKind::Let,
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::Number
            ]
        );
        assert_eq!(
            lex("print /* block\ncomment */ 1"),
            vec![TokenKind::Print, TokenKind::Number]
        );
    }

    #[test]
    fn test_block_comment_body_may_end_with_stars() {
        assert_eq!(
            lex(r#"print "hi" /* tail **/ print 1"#),
            vec![
                TokenKind::Print,
                TokenKind::String,
                TokenKind::Print,
                TokenKind::Number
            ]
        );
        assert_eq!(lex("print /**/ 1"), vec![TokenKind::Print, TokenKind::Number]);
        assert_eq!(lex("print /* *** */ 1"), vec![TokenKind::Print, TokenKind::Number]);
    }

    #[test]
    fn test_statement_stream() {
        assert_eq!(
            lex(r#"let greeting = "hi""#),
            vec![
                TokenKind::Let,
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::String
            ]
        );
    }

    #[test]
    fn test_unknown_syntax() {
        let err = tokenize("let x = @bang").unwrap_err();
        assert_eq!(err.nearby, "@bang");
    }

    #[test]
    fn test_uppercase_identifier_rejected() {
        assert!(tokenize("Bad").is_err());
    }

    #[test]
    fn test_exhausted_stream_keeps_returning_none() {
        let mut tokenizer = Tokenizer::new("x");
        assert!(tokenizer.next_token().unwrap().is_some());
        assert!(tokenizer.next_token().unwrap().is_none());
        assert!(tokenizer.next_token().unwrap().is_none());
        assert!(tokenizer.next_token().unwrap().is_none());
    }
}
