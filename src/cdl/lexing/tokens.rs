//! Token definitions for the cdl format
//!
//! The tokens are defined using the logos derive macro. Whitespace and
//! comments (line and block) are skipped at this stage; they contribute
//! nothing beyond the spans of the tokens around them.

use logos::Logos;
use serde::Serialize;

/// All possible tokens in the cdl format
#[derive(Logos, Debug, PartialEq, Clone, Serialize)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r"/\*[^*]*\*+([^/*][^*]*\*+)*/")]
pub enum Token {
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,

    #[regex(r#""([^"\\]|\\.)*""#)]
    DoubleQuoted,
    #[regex(r"'([^'\\]|\\.)*'")]
    SingleQuoted,

    #[regex(r"-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?")]
    Number,

    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("null")]
    Null,

    // Unquoted identifiers double as bare strings and member names
    #[regex(r"[A-Za-z_][A-Za-z0-9_.-]*")]
    Word,
}

impl Token {
    /// Check if this token opens a container
    pub fn opens_container(&self) -> bool {
        matches!(self, Token::OpenBrace | Token::OpenBracket)
    }

    /// Check if this token can start a value
    pub fn starts_value(&self) -> bool {
        matches!(
            self,
            Token::OpenBrace
                | Token::OpenBracket
                | Token::DoubleQuoted
                | Token::SingleQuoted
                | Token::Number
                | Token::True
                | Token::False
                | Token::Null
                | Token::Word
        )
    }

    /// Check if this token can serve as a member name
    pub fn is_member_name(&self) -> bool {
        matches!(
            self,
            Token::DoubleQuoted | Token::SingleQuoted | Token::Word
        )
    }

    /// Human-readable description used in diagnostics
    pub fn describe(&self) -> &'static str {
        match self {
            Token::OpenBrace => "'{'",
            Token::CloseBrace => "'}'",
            Token::OpenBracket => "'['",
            Token::CloseBracket => "']'",
            Token::Colon => "':'",
            Token::Comma => "','",
            Token::DoubleQuoted | Token::SingleQuoted => "a string",
            Token::Number => "a number",
            Token::True | Token::False => "a boolean",
            Token::Null => "null",
            Token::Word => "a word",
        }
    }
}
