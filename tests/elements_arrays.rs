//! Tests for the array element in isolation
//!
//! Covers the ordered-container contract: insertion order, bounds-checked
//! access, and the canonical bracketed serialization.

use cdl::cdl::ast::{Array, Element, Node, Number, SourceBuffer, TreeError};
use std::sync::Arc;

fn buffer() -> SourceBuffer {
    Arc::from("")
}

fn number(value: f64) -> Number {
    let mut n = Number::allocate(buffer());
    n.set_value(value);
    n
}

#[test]
fn test_empty_array_serializes_as_brackets() {
    let array = Array::allocate(buffer());
    assert_eq!(array.to_json(), "[]");
    assert_eq!(array.debug_name(), "");
}

#[test]
fn test_children_join_with_comma_space() {
    let mut array = Array::allocate(buffer());
    array.push(number(1.0));
    array.push(number(2.0));
    array.push(number(3.0));
    assert_eq!(array.to_json(), "[1, 2, 3]");
}

#[test]
fn test_size_tracks_appends() {
    let mut array = Array::allocate(buffer());
    assert_eq!(array.len(), 0);
    for i in 0..10 {
        array.push(number(i as f64));
        assert_eq!(array.len(), i + 1);
    }
    for i in 0..10 {
        assert_eq!(array.get_f64(i).unwrap(), i as f64);
    }
}

#[test]
fn test_get_at_size_is_out_of_range() {
    let mut array = Array::allocate(buffer());
    assert_eq!(
        array.get(0).unwrap_err(),
        TreeError::OutOfRange { index: 0, len: 0 }
    );

    array.push(number(1.0));
    array.push(number(2.0));
    assert_eq!(
        array.get(2).unwrap_err(),
        TreeError::OutOfRange { index: 2, len: 2 }
    );
}

#[test]
fn test_nested_arrays_nest_brackets() {
    let mut inner = Array::allocate(buffer());
    inner.push(number(1.0));
    inner.push(number(2.0));

    let mut outer = Array::allocate(buffer());
    outer.push(inner);
    outer.push(number(3.0));

    assert_eq!(outer.to_json(), "[[1, 2], 3]");
}

#[test]
fn test_serialization_is_idempotent() {
    let mut array = Array::allocate(buffer());
    array.push(number(1.0));
    array.push(number(2.0));

    let first = array.to_json();
    let second = array.to_json();
    assert_eq!(first, second);
    assert_eq!(first, "[1, 2]");
}

#[test]
fn test_named_array_serializes_with_label_prefix() {
    let mut array = Array::allocate(buffer());
    array.set_name("pts");
    array.push(number(1.0));
    array.push(number(2.0));
    assert_eq!(array.to_json(), "pts[1, 2]");
}

#[test]
fn test_array_never_emits_child_names() {
    let mut child = Element::from(number(7.0));
    child.set_name("stray");

    let mut array = Array::allocate(buffer());
    array.push(child);
    assert_eq!(array.to_json(), "[7]");
}

#[test]
fn test_mixed_child_kinds() {
    use cdl::cdl::ast::{Literal, LiteralKind, Str};
    use cdl::cdl::ast::Span;

    let source: SourceBuffer = Arc::from("'go'");
    let mut s = Str::allocate(source);
    s.info.set_span(Span::new(0, 4).unwrap());
    s.set_value_span(Span::new(1, 3).unwrap());

    let mut flag = Literal::allocate(buffer());
    flag.set_kind(LiteralKind::Bool(true));

    let mut array = Array::allocate(buffer());
    array.push(number(1.5));
    array.push(s);
    array.push(flag);

    assert_eq!(array.to_json(), "[1.5, \"go\", true]");
}
