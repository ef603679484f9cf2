//! Error types for element tree operations

use std::fmt;

/// Errors surfaced by tree construction and tree access.
///
/// None of these are recovered from internally; they signal logic errors in
/// the parser (`InvalidSpan`) or in a consumer of the finished tree
/// (`OutOfRange`, `NoSuchKey`, `WrongType`) and are reported synchronously.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeError {
    /// Index-based access outside `[0, len)`
    OutOfRange { index: usize, len: usize },
    /// A span with `end < start`; indicates a parser bug
    InvalidSpan { start: usize, end: usize },
    /// Named member lookup on a container with no such member
    NoSuchKey { name: String },
    /// Typed access on an element of a different kind
    WrongType {
        expected: &'static str,
        found: &'static str,
    },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::OutOfRange { index, len } => {
                write!(f, "no element at index {} (container has {})", index, len)
            }
            TreeError::InvalidSpan { start, end } => {
                write!(f, "invalid span: end {} is before start {}", end, start)
            }
            TreeError::NoSuchKey { name } => {
                write!(f, "no member named '{}'", name)
            }
            TreeError::WrongType { expected, found } => {
                write!(f, "expected a {} element, found {}", expected, found)
            }
        }
    }
}

impl std::error::Error for TreeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = TreeError::OutOfRange { index: 4, len: 2 };
        assert_eq!(format!("{}", err), "no element at index 4 (container has 2)");
    }

    #[test]
    fn test_invalid_span_display() {
        let err = TreeError::InvalidSpan { start: 9, end: 3 };
        assert_eq!(format!("{}", err), "invalid span: end 3 is before start 9");
    }

    #[test]
    fn test_wrong_type_display() {
        let err = TreeError::WrongType {
            expected: "number",
            found: "string",
        };
        assert_eq!(format!("{}", err), "expected a number element, found string");
    }
}
