//! Element
//!
//! `Element` is the closed sum of every node kind that can appear in a
//! parsed tree. It lets the parser and downstream consumers operate
//! uniformly on mixed structures (an array of numbers and nested objects,
//! an object mixing strings and booleans, ...).
//!
//! The variants form a strict tree: containers (arrays, objects) own their
//! children exclusively, so serialization always terminates.

use super::elements::{Array, Literal, Number, Object, Str};
use super::info::NodeInfo;
use super::span::Span;
use super::traits::Node;
use std::fmt;

/// One parsed node of the tree, of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Array(Array),
    Object(Object),
    Str(Str),
    Number(Number),
    Literal(Literal),
}

impl Element {
    pub fn info(&self) -> &NodeInfo {
        match self {
            Element::Array(a) => &a.info,
            Element::Object(o) => &o.info,
            Element::Str(s) => &s.info,
            Element::Number(n) => &n.info,
            Element::Literal(l) => &l.info,
        }
    }

    pub fn info_mut(&mut self) -> &mut NodeInfo {
        match self {
            Element::Array(a) => &mut a.info,
            Element::Object(o) => &mut o.info,
            Element::Str(s) => &mut s.info,
            Element::Number(n) => &mut n.info,
            Element::Literal(l) => &mut l.info,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.info().name()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.info_mut().set_name(name);
    }

    pub fn set_span(&mut self, span: Span) {
        self.info_mut().set_span(span);
    }

    /// The source text covered by this element's span.
    pub fn content(&self) -> &str {
        self.info().content()
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Element::Array(_) | Element::Object(_))
    }

    // Kind conversions, `None` when the element is of a different kind.

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Element::Number(n) => Some(n.value()),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Element::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Element::Str(s) => Some(s.value()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Element::Literal(l) => l.as_bool(),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        match self {
            Element::Literal(l) => l.is_null(),
            _ => false,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Element::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Element::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Write this element's value text, without any member-name prefix.
    ///
    /// Containers emit member names for their own children; a child never
    /// duplicates its name into its value text.
    pub(crate) fn write_value_json(&self, out: &mut String) {
        match self {
            Element::Array(a) => a.write_value_json(out),
            Element::Object(o) => o.write_value_json(out),
            Element::Str(s) => s.write_value_json(out),
            Element::Number(n) => n.write_value_json(out),
            Element::Literal(l) => l.write_value_json(out),
        }
    }

    pub(crate) fn write_formatted(&self, out: &mut String, indent: usize) {
        match self {
            Element::Array(a) => a.write_formatted(out, indent),
            Element::Object(o) => o.write_formatted(out, indent),
            Element::Str(s) => s.write_value_json(out),
            Element::Number(n) => n.write_value_json(out),
            Element::Literal(l) => l.write_value_json(out),
        }
    }
}

impl Node for Element {
    fn node_type(&self) -> &'static str {
        match self {
            Element::Array(a) => a.node_type(),
            Element::Object(o) => o.node_type(),
            Element::Str(s) => s.node_type(),
            Element::Number(n) => n.node_type(),
            Element::Literal(l) => l.node_type(),
        }
    }

    fn debug_name(&self) -> &str {
        self.info().debug_name()
    }

    fn span(&self) -> Option<Span> {
        self.info().span()
    }

    fn to_json(&self) -> String {
        let mut out = String::from(self.debug_name());
        self.write_value_json(&mut out);
        out
    }

    fn to_formatted_json(&self, indent: usize) -> String {
        let mut out = String::from(self.debug_name());
        self.write_formatted(&mut out, indent);
        out
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl From<Array> for Element {
    fn from(array: Array) -> Self {
        Element::Array(array)
    }
}

impl From<Object> for Element {
    fn from(object: Object) -> Self {
        Element::Object(object)
    }
}

impl From<Str> for Element {
    fn from(string: Str) -> Self {
        Element::Str(string)
    }
}

impl From<Number> for Element {
    fn from(number: Number) -> Self {
        Element::Number(number)
    }
}

impl From<Literal> for Element {
    fn from(literal: Literal) -> Self {
        Element::Literal(literal)
    }
}
