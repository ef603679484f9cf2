//! Parse error reporting
//!
//! Parse errors carry the failure kind, the 1-indexed line/column where it
//! happened, and a pre-rendered source-context excerpt: numbered lines
//! around the error with a `>>` marker on the offending one.

use crate::cdl::ast::span::{SourceMap, Span};
use std::fmt;

/// What went wrong while parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// Input the lexer could not match
    UnrecognizedInput { slice: String },
    /// A quote was opened and never closed
    UnterminatedString,
    /// A token that cannot appear here
    UnexpectedToken {
        expected: &'static str,
        found: &'static str,
    },
    /// Input ended mid-construct
    UnexpectedEnd { expected: &'static str },
    /// The document does not start with an object
    ExpectedObjectDocument { found: &'static str },
    /// Tokens remain after the top-level object closed
    TrailingContent { found: &'static str },
    /// A number lexeme that does not parse as f64
    InvalidNumber { literal: String },
    /// Nothing but whitespace and comments
    EmptyDocument,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::UnrecognizedInput { slice } => {
                write!(f, "unrecognized input '{}'", slice)
            }
            ParseErrorKind::UnterminatedString => write!(f, "unterminated string"),
            ParseErrorKind::UnexpectedToken { expected, found } => {
                write!(f, "expected {}, found {}", expected, found)
            }
            ParseErrorKind::UnexpectedEnd { expected } => {
                write!(f, "unexpected end of input, expected {}", expected)
            }
            ParseErrorKind::ExpectedObjectDocument { found } => {
                write!(f, "expected an object at the top level, found {}", found)
            }
            ParseErrorKind::TrailingContent { found } => {
                write!(
                    f,
                    "unexpected {} after the top-level object closed",
                    found
                )
            }
            ParseErrorKind::InvalidNumber { literal } => {
                write!(f, "invalid number '{}'", literal)
            }
            ParseErrorKind::EmptyDocument => write!(f, "empty document"),
        }
    }
}

/// A parse failure with position and source context.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    kind: ParseErrorKind,
    line: usize,
    column: usize,
    context: String,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, span: Span, source: &str) -> Self {
        let position = SourceMap::new(source).position(span.start());
        let context = format_source_context(source, position.line);
        Self {
            kind,
            line: position.line + 1,
            column: position.column + 1,
            context,
        }
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// 1-indexed line of the error.
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-indexed column of the error.
    pub fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "error: {} at line {}, column {}",
            self.kind, self.line, self.column
        )?;
        writeln!(f)?;
        write!(f, "{}", self.context)
    }
}

impl std::error::Error for ParseError {}

/// Format source code context around an error line.
///
/// Shows 2 lines before the error, the error line with a >> marker, and 2
/// lines after. All lines are numbered for easy reference.
fn format_source_context(source: &str, error_line: usize) -> String {
    let lines: Vec<&str> = source.lines().collect();

    let start_line = error_line.saturating_sub(2);
    let end_line = (error_line + 3).min(lines.len());

    let mut context = String::new();

    for line_num in start_line..end_line {
        let marker = if line_num == error_line { ">>" } else { "  " };
        let display_line_num = line_num + 1; // 1-indexed for display

        if line_num < lines.len() {
            context.push_str(&format!(
                "{} {:3} | {}\n",
                marker, display_line_num, lines[line_num]
            ));
        }
    }

    context
}
