//! Parser
//!
//! Recursive descent over the lexed token stream, producing the element
//! tree. The public entry point is [`parse`]; failures surface as
//! [`ParseError`] with position and source context.

pub mod error;
pub mod parser;

pub use error::{ParseError, ParseErrorKind};
pub use parser::parse;
