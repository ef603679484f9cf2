//! Tests for the object element in isolation
//!
//! Covers member naming, declaration order, named lookup, and the
//! `"name": value` serialization the object emits for its members.

use cdl::cdl::ast::{Array, Node, Number, Object, SourceBuffer, TreeError};
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
fn test_empty_object() {
    let object = Object::allocate(buffer());
    assert_eq!(object.to_json(), "{}");
}

#[test]
fn test_members_keep_declaration_order() {
    let mut object = Object::allocate(buffer());
    object.push_named("z", number(1.0));
    object.push_named("a", number(2.0));
    object.push_named("m", number(3.0));

    assert_eq!(object.to_json(), "{ \"z\": 1, \"a\": 2, \"m\": 3 }");
    assert_eq!(object.get(0).unwrap().name(), Some("z"));
    assert_eq!(object.get(2).unwrap().name(), Some("m"));
}

#[test]
fn test_named_member_lookup() {
    let mut object = Object::allocate(buffer());
    object.push_named("width", number(100.0));

    assert_eq!(object.named_f64("width").unwrap(), 100.0);
    assert_eq!(
        object.named_f64("height").unwrap_err(),
        TreeError::NoSuchKey {
            name: "height".to_string(),
        }
    );
}

#[test]
fn test_typed_mismatch_reports_wrong_type() {
    let mut object = Object::allocate(buffer());
    object.push_named("width", number(100.0));

    assert_eq!(
        object.named_str("width").unwrap_err(),
        TreeError::WrongType {
            expected: "string",
            found: "number",
        }
    );
}

#[test]
fn test_array_member_name_comes_from_object() {
    let mut points = Array::allocate(buffer());
    points.push(number(1.0));
    points.push(number(2.0));

    let mut object = Object::allocate(buffer());
    object.push_named("points", points);

    assert_eq!(object.to_json(), "{ \"points\": [1, 2] }");

    // The member carries its name for lookup and diagnostics
    let member = object.named("points").unwrap();
    assert_eq!(member.name(), Some("points"));
    assert_eq!(member.as_array().unwrap().len(), 2);
}

#[test]
fn test_nested_objects() {
    let mut inner = Object::allocate(buffer());
    inner.push_named("x", number(0.0));

    let mut outer = Object::allocate(buffer());
    outer.push_named("origin", inner);

    assert_eq!(outer.to_json(), "{ \"origin\": { \"x\": 0 } }");
    assert_eq!(
        outer
            .named_object("origin")
            .unwrap()
            .named_f64("x")
            .unwrap(),
        0.0
    );
}

#[test]
fn test_owner_reference_is_informational() {
    use cdl::cdl::ast::ContainerKind;

    let mut object = Object::allocate(buffer());
    object.push_named("a", number(1.0));
    object.push_named("b", number(2.0));

    let owner = object.get(1).unwrap().info().owner().unwrap();
    assert_eq!(owner.kind, ContainerKind::Object);
    assert_eq!(owner.index, 1);
    assert_eq!(format!("{}", owner), "object[1]");
}
