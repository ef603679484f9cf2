//! Object element
//!
//! The named-member specialization of the container shape. Members keep
//! their declaration order; the object emits the `"name": value` prefix for
//! each member itself, so a member's value text never duplicates its name.

use super::super::container::{Container, ContainerKind};
use super::super::element::Element;
use super::super::info::{NodeInfo, SourceBuffer};
use super::super::json::push_indent;
use super::super::span::Span;
use super::super::traits::Node;
use std::fmt;

/// An ordered collection of named members.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    pub info: NodeInfo,
    children: Container,
}

impl Object {
    /// Construct an empty object bound to the shared source buffer.
    pub fn allocate(buffer: SourceBuffer) -> Self {
        Self {
            info: NodeInfo::new(buffer),
            children: Container::new(ContainerKind::Object),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.info.set_name(name);
    }

    /// Append a member under the given name.
    pub fn push_named(&mut self, name: impl Into<String>, element: impl Into<Element>) {
        let mut element = element.into();
        element.set_name(name);
        self.children.push(element);
    }

    pub fn elements(&self) -> &Container {
        &self.children
    }

    pub(crate) fn write_value_json(&self, out: &mut String) {
        if self.children.is_empty() {
            out.push_str("{}");
            return;
        }
        out.push_str("{ ");
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push('"');
            out.push_str(child.info().debug_name());
            out.push_str("\": ");
            child.write_value_json(out);
        }
        out.push_str(" }");
    }

    pub(crate) fn write_formatted(&self, out: &mut String, indent: usize) {
        if self.children.is_empty() {
            out.push_str("{}");
            return;
        }
        out.push_str("{\n");
        let last = self.children.len() - 1;
        for (i, child) in self.children.iter().enumerate() {
            push_indent(out, indent + 1);
            out.push('"');
            out.push_str(child.info().debug_name());
            out.push_str("\": ");
            child.write_formatted(out, indent + 1);
            if i < last {
                out.push(',');
            }
            out.push('\n');
        }
        push_indent(out, indent);
        out.push('}');
    }
}

impl Node for Object {
    fn node_type(&self) -> &'static str {
        "object"
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

impl std::ops::Deref for Object {
    type Target = Container;

    fn deref(&self) -> &Self::Target {
        &self.children
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}
