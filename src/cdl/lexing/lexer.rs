//! Tokenization entry point
//!
//! Converts source text into a flat stream of `(Token, Span)` pairs. The
//! byte spans come straight from the logos lexer and are preserved exactly;
//! the parser copies them onto the elements it builds, which is the only
//! location information the finished tree carries.

use super::tokens::Token;
use crate::cdl::ast::span::Span;
use logos::Logos;
use std::fmt;

/// A stretch of input the lexer could not match.
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    pub span: Span,
    pub slice: String,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unrecognized input '{}' at offset {}",
            self.slice,
            self.span.start()
        )
    }
}

impl std::error::Error for LexError {}

/// Tokenize the full source, failing on the first unmatchable input.
pub fn tokenize(source: &str) -> Result<Vec<(Token, Span)>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let span = Span::at(range.start, range.len());
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) => {
                return Err(LexError {
                    span,
                    slice: lexer.slice().to_string(),
                })
            }
        }
    }

    Ok(tokens)
}
