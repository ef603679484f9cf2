//! Main module for cdl library functionality

pub mod ast;
pub mod lexing;
pub mod parsing;

pub use parsing::{parse, ParseError};
