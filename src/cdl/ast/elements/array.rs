//! Array element
//!
//! The ordered-list specialization of the container shape: children are
//! appended in arrival order and serialize comma-separated between `[` `]`
//! delimiters. An array never emits member names for its children, even if
//! a child happens to carry one.

use super::super::container::{Container, ContainerKind};
use super::super::element::Element;
use super::super::info::{NodeInfo, SourceBuffer};
use super::super::json::push_indent;
use super::super::span::Span;
use super::super::traits::Node;
use std::fmt;

/// An ordered, unnamed collection of elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Array {
    pub info: NodeInfo,
    children: Container,
}

impl Array {
    /// Construct an empty array bound to the shared source buffer.
    pub fn allocate(buffer: SourceBuffer) -> Self {
        Self {
            info: NodeInfo::new(buffer),
            children: Container::new(ContainerKind::Array),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.info.set_name(name);
    }

    /// Append a child. Arrays accept any element kind.
    pub fn push(&mut self, element: impl Into<Element>) {
        self.children.push(element.into());
    }

    pub fn elements(&self) -> &Container {
        &self.children
    }

    pub(crate) fn write_value_json(&self, out: &mut String) {
        out.push('[');
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            child.write_value_json(out);
        }
        out.push(']');
    }

    pub(crate) fn write_formatted(&self, out: &mut String, indent: usize) {
        // Arrays of scalars stay on one line; anything nested goes vertical.
        if self.children.is_empty() || self.children.iter().all(|c| !c.is_container()) {
            self.write_value_json(out);
            return;
        }
        out.push_str("[\n");
        let last = self.children.len() - 1;
        for (i, child) in self.children.iter().enumerate() {
            push_indent(out, indent + 1);
            child.write_formatted(out, indent + 1);
            if i < last {
                out.push(',');
            }
            out.push('\n');
        }
        push_indent(out, indent);
        out.push(']');
    }
}

impl Node for Array {
    fn node_type(&self) -> &'static str {
        "array"
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

    fn to_formatted_json(&self, indent: usize) -> String {
        let mut out = String::from(self.debug_name());
        self.write_formatted(&mut out, indent);
        out
    }
}

impl std::ops::Deref for Array {
    type Target = Container;

    fn deref(&self) -> &Self::Target {
        &self.children
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}
