//! Lexer
//!
//! Tokenization for the cdl format: a single logos pass over the source
//! produces a flat stream of `(Token, Span)` pairs. The byte spans are the
//! ground truth for all location tracking downstream; the parser copies
//! them onto the elements it builds and nothing else ever changes them.

pub mod lexer;
pub mod tokens;

pub use lexer::{tokenize, LexError};
pub use tokens::Token;
