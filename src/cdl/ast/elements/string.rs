//! String element
//!
//! A string leaf keeps two spans: the element span covers the full lexeme
//! (quotes included, when present) and the value span covers the characters
//! between the quotes. Both slice the shared buffer; the text is never
//! copied.

use super::super::info::{NodeInfo, SourceBuffer};
use super::super::span::Span;
use super::super::traits::Node;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Str {
    pub info: NodeInfo,
    value_span: Option<Span>,
}

impl Str {
    pub fn allocate(buffer: SourceBuffer) -> Self {
        Self {
            info: NodeInfo::new(buffer),
            value_span: None,
        }
    }

    /// Record the span of the string's characters, excluding quotes.
    pub fn set_value_span(&mut self, span: Span) {
        self.value_span = Some(span);
    }

    /// The string's characters. Falls back to the element span for unquoted
    /// strings where the two coincide.
    pub fn value(&self) -> &str {
        match self.value_span {
            Some(span) => self.info.buffer().get(span.range()).unwrap_or(""),
            None => self.info.content(),
        }
    }

    pub(crate) fn write_value_json(&self, out: &mut String) {
        out.push('"');
        out.push_str(self.value());
        out.push('"');
    }
}

impl Node for Str {
    fn node_type(&self) -> &'static str {
        "string"
    }

    fn debug_name(&self) -> &str {
        self.info.debug_name()
    }

    fn span(&self) -> Option<Span> {
        self.info.span()
    }

    fn to_json(&self) -> String {
        let mut out = String::from(self.debug_name());
        self.write_value_json(&mut out);
        out
    }

    fn to_formatted_json(&self, _indent: usize) -> String {
        self.to_json()
    }
}

impl fmt::Display for Str {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_quoted_value_excludes_quotes() {
        let buffer: SourceBuffer = Arc::from("{ label: 'start' }");
        let mut s = Str::allocate(buffer);
        s.info.set_span(Span::new(9, 16).unwrap());
        s.set_value_span(Span::new(10, 15).unwrap());

        assert_eq!(s.value(), "start");
        assert_eq!(s.info.content(), "'start'");
        assert_eq!(s.to_json(), "\"start\"");
    }

    #[test]
    fn test_unquoted_value_uses_element_span() {
        let buffer: SourceBuffer = Arc::from("{ anchor: parent }");
        let mut s = Str::allocate(buffer);
        s.info.set_span(Span::new(10, 16).unwrap());

        assert_eq!(s.value(), "parent");
        assert_eq!(s.to_json(), "\"parent\"");
    }

    #[test]
    fn test_empty_string() {
        let buffer: SourceBuffer = Arc::from("''");
        let mut s = Str::allocate(buffer);
        s.info.set_span(Span::new(0, 2).unwrap());
        s.set_value_span(Span::new(1, 1).unwrap());
        assert_eq!(s.value(), "");
        assert_eq!(s.to_json(), "\"\"");
    }
}
