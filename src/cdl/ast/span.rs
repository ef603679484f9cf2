//! Position and span tracking for source locations
//!
//! Every parsed element records the half-open byte range `[start, end)` it
//! occupies in the original source buffer. Spans are the only location data
//! stored on the tree itself; line:column positions are derived on demand
//! (for diagnostics) through [`SourceMap`].
//!
//! ## Key design
//!
//! - **Spans are validated at construction**: `end < start` is a logic error
//!   in the parser and is rejected immediately, never stored.
//! - **Byte offsets, not char indices**: spans slice the UTF-8 source
//!   directly and stay cheap to produce during lexing.
//! - **Efficient conversion**: O(log n) binary search for byte-to-position
//!   conversion via a precomputed line-start table.

use super::error::TreeError;
use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// A half-open `[start, end)` byte range into the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a span, rejecting inverted bounds.
    pub fn new(start: usize, end: usize) -> Result<Self, TreeError> {
        if end < start {
            return Err(TreeError::InvalidSpan { start, end });
        }
        Ok(Self { start, end })
    }

    /// Create a span from a start offset and a length. Cannot be inverted.
    pub fn at(start: usize, len: usize) -> Self {
        Self {
            start,
            end: start + len,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The span as a std range, usable for slicing the source buffer.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Check if a byte offset falls inside this span.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// The smallest span covering both `self` and `other`.
    pub fn join(&self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A line:column position in source text, zero-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// Provides fast conversion from byte offsets to line/column positions.
pub struct SourceMap {
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl SourceMap {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self { line_starts }
    }

    /// Convert a byte offset to a line/column position.
    pub fn position(&self, byte_offset: usize) -> Position {
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);

        let column = byte_offset - self.line_starts[line];

        Position::new(line, column)
    }

    /// Convert a span to its start and end positions.
    pub fn positions(&self, span: Span) -> (Position, Position) {
        (self.position(span.start()), self.position(span.end()))
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset where the given line starts.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }
}
