//! Ordered, exclusively-owned child storage
//!
//! A [`Container`] owns an ordered sequence of child [`Element`]s. Children
//! are appended one by one while the parser builds the tree and are never
//! removed or reordered afterwards; insertion order is semantically
//! meaningful (array order, object member declaration order).
//!
//! Appending records an informational [`OwnerRef`](super::info::OwnerRef)
//! on the child: which container kind it belongs to and at what index. The
//! record is used for diagnostics only.
//!
//! ## Accessing children
//!
//! - `get(index)` is bounds-checked and fails with `TreeError::OutOfRange`.
//! - `named(name)` finds the first child carrying the given member name.
//! - Typed accessors (`get_f64`, `named_str`, ...) combine lookup with a
//!   kind check and fail with `TreeError::WrongType` / `NoSuchKey`.

use super::element::Element;
use super::error::TreeError;
use super::traits::Node;
use super::info::OwnerRef;
use std::fmt;

/// The kind of container an element was appended to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Array,
    Object,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKind::Array => write!(f, "array"),
            ContainerKind::Object => write!(f, "object"),
        }
    }
}

/// Ordered collection of child elements with exclusive ownership.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    kind: ContainerKind,
    elements: Vec<Element>,
}

impl Container {
    pub fn new(kind: ContainerKind) -> Self {
        Self {
            kind,
            elements: Vec::new(),
        }
    }

    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    /// Append a child, recording its owner reference.
    pub fn push(&mut self, mut element: Element) {
        element.info_mut().set_owner(OwnerRef {
            kind: self.kind,
            index: self.elements.len(),
        });
        self.elements.push(element);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Bounds-checked access by position.
    pub fn get(&self, index: usize) -> Result<&Element, TreeError> {
        self.elements.get(index).ok_or(TreeError::OutOfRange {
            index,
            len: self.elements.len(),
        })
    }

    /// First child carrying the given member name.
    pub fn named(&self, name: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.name() == Some(name))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    // Typed access by position.

    pub fn get_f64(&self, index: usize) -> Result<f64, TreeError> {
        require_f64(self.get(index)?)
    }

    pub fn get_i64(&self, index: usize) -> Result<i64, TreeError> {
        require_i64(self.get(index)?)
    }

    pub fn get_str(&self, index: usize) -> Result<&str, TreeError> {
        require_str(self.get(index)?)
    }

    pub fn get_bool(&self, index: usize) -> Result<bool, TreeError> {
        require_bool(self.get(index)?)
    }

    pub fn get_array(&self, index: usize) -> Result<&super::elements::Array, TreeError> {
        require_array(self.get(index)?)
    }

    pub fn get_object(&self, index: usize) -> Result<&super::elements::Object, TreeError> {
        require_object(self.get(index)?)
    }

    // Typed access by member name.

    pub fn named_f64(&self, name: &str) -> Result<f64, TreeError> {
        require_f64(self.require_named(name)?)
    }

    pub fn named_i64(&self, name: &str) -> Result<i64, TreeError> {
        require_i64(self.require_named(name)?)
    }

    pub fn named_str(&self, name: &str) -> Result<&str, TreeError> {
        require_str(self.require_named(name)?)
    }

    pub fn named_bool(&self, name: &str) -> Result<bool, TreeError> {
        require_bool(self.require_named(name)?)
    }

    pub fn named_array(&self, name: &str) -> Result<&super::elements::Array, TreeError> {
        require_array(self.require_named(name)?)
    }

    pub fn named_object(&self, name: &str) -> Result<&super::elements::Object, TreeError> {
        require_object(self.require_named(name)?)
    }

    fn require_named(&self, name: &str) -> Result<&Element, TreeError> {
        self.named(name).ok_or_else(|| TreeError::NoSuchKey {
            name: name.to_string(),
        })
    }
}

fn require_f64(element: &Element) -> Result<f64, TreeError> {
    element.as_f64().ok_or(TreeError::WrongType {
        expected: "number",
        found: element.node_type(),
    })
}

fn require_i64(element: &Element) -> Result<i64, TreeError> {
    element.as_i64().ok_or(TreeError::WrongType {
        expected: "integer",
        found: element.node_type(),
    })
}

fn require_str(element: &Element) -> Result<&str, TreeError> {
    element.as_str().ok_or(TreeError::WrongType {
        expected: "string",
        found: element.node_type(),
    })
}

fn require_bool(element: &Element) -> Result<bool, TreeError> {
    element.as_bool().ok_or(TreeError::WrongType {
        expected: "boolean",
        found: element.node_type(),
    })
}

fn require_array(element: &Element) -> Result<&super::elements::Array, TreeError> {
    element.as_array().ok_or(TreeError::WrongType {
        expected: "array",
        found: element.node_type(),
    })
}

fn require_object(element: &Element) -> Result<&super::elements::Object, TreeError> {
    element.as_object().ok_or(TreeError::WrongType {
        expected: "object",
        found: element.node_type(),
    })
}

// Read-only Deref for ergonomic slice access; the append-only contract
// means no DerefMut.
impl std::ops::Deref for Container {
    type Target = [Element];

    fn deref(&self) -> &Self::Target {
        &self.elements
    }
}

impl<'a> IntoIterator for &'a Container {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({} elements)", self.kind, self.elements.len())
    }
}

#[cfg(test)]
mod tests {
    use super::super::elements::{Literal, LiteralKind, Number, Str};
    use super::super::info::SourceBuffer;
    use super::*;
    use std::sync::Arc;

    fn buffer() -> SourceBuffer {
        Arc::from("")
    }

    fn number(value: f64) -> Element {
        let mut n = Number::allocate(buffer());
        n.set_value(value);
        Element::Number(n)
    }

    fn named_number(name: &str, value: f64) -> Element {
        let mut element = number(value);
        element.set_name(name);
        element
    }

    #[test]
    fn test_empty_container() {
        let container = Container::new(ContainerKind::Array);
        assert_eq!(container.len(), 0);
        assert!(container.is_empty());
    }

    #[test]
    fn test_push_preserves_insertion_order() {
        let mut container = Container::new(ContainerKind::Array);
        container.push(number(1.0));
        container.push(number(2.0));
        container.push(number(3.0));

        assert_eq!(container.len(), 3);
        assert_eq!(container.get(0).unwrap().as_f64(), Some(1.0));
        assert_eq!(container.get(1).unwrap().as_f64(), Some(2.0));
        assert_eq!(container.get(2).unwrap().as_f64(), Some(3.0));
    }

    #[test]
    fn test_get_out_of_range() {
        let mut container = Container::new(ContainerKind::Array);
        container.push(number(1.0));

        let err = container.get(1).unwrap_err();
        assert_eq!(err, TreeError::OutOfRange { index: 1, len: 1 });

        let err = container.get(usize::MAX).unwrap_err();
        assert!(matches!(err, TreeError::OutOfRange { len: 1, .. }));
    }

    #[test]
    fn test_get_on_empty_container() {
        let container = Container::new(ContainerKind::Object);
        assert_eq!(
            container.get(0).unwrap_err(),
            TreeError::OutOfRange { index: 0, len: 0 }
        );
    }

    #[test]
    fn test_push_records_owner() {
        let mut container = Container::new(ContainerKind::Object);
        container.push(number(1.0));
        container.push(number(2.0));

        let owner = container.get(1).unwrap().info().owner().unwrap();
        assert_eq!(owner.kind, ContainerKind::Object);
        assert_eq!(owner.index, 1);
    }

    #[test]
    fn test_named_lookup() {
        let mut container = Container::new(ContainerKind::Object);
        container.push(named_number("width", 100.0));
        container.push(named_number("height", 50.0));

        assert_eq!(container.named("height").unwrap().as_f64(), Some(50.0));
        assert!(container.named("depth").is_none());
    }

    #[test]
    fn test_typed_access_by_index() {
        let mut container = Container::new(ContainerKind::Array);
        container.push(number(4.0));
        let mut s = Str::allocate(buffer());
        s.info.set_span(crate::cdl::ast::span::Span::new(0, 0).unwrap());
        container.push(Element::Str(s));
        let mut flag = Literal::allocate(buffer());
        flag.set_kind(LiteralKind::Bool(true));
        container.push(Element::Literal(flag));

        assert_eq!(container.get_f64(0).unwrap(), 4.0);
        assert_eq!(container.get_i64(0).unwrap(), 4);
        assert_eq!(container.get_str(1).unwrap(), "");
        assert!(container.get_bool(2).unwrap());
    }

    #[test]
    fn test_typed_access_wrong_type() {
        let mut container = Container::new(ContainerKind::Array);
        container.push(number(4.0));

        let err = container.get_bool(0).unwrap_err();
        assert_eq!(
            err,
            TreeError::WrongType {
                expected: "boolean",
                found: "number",
            }
        );
    }

    #[test]
    fn test_named_typed_missing_key() {
        let container = Container::new(ContainerKind::Object);
        let err = container.named_f64("width").unwrap_err();
        assert_eq!(
            err,
            TreeError::NoSuchKey {
                name: "width".to_string(),
            }
        );
    }

    #[test]
    fn test_iteration_order() {
        let mut container = Container::new(ContainerKind::Array);
        container.push(number(1.0));
        container.push(number(2.0));

        let values: Vec<f64> = container.iter().filter_map(|e| e.as_f64()).collect();
        assert_eq!(values, vec![1.0, 2.0]);
    }
}
