//! Integration tests for document mutation.

use keel_json_core::document::{DocumentView, JsonDataUnit, MutableDocument};
use serde_json::{Value, json};

#[test]
fn test_put_replaces_and_remove_key_is_idempotent() {
    let mut doc = JsonDataUnit::new();
    assert_eq!(doc.put("a", 1), None);
    assert_eq!(doc.put("a", "one"), Some(json!(1)));
    assert_eq!(doc.read_string("a"), Some("one"));

    assert_eq!(doc.remove_key("a"), Some(json!("one")));
    assert_eq!(doc.remove_key("a"), None);
    assert!(doc.is_empty());
}

#[test]
fn test_ensure_object_aliases_the_parent() {
    let mut doc = JsonDataUnit::new();
    doc.ensure_object("o").put("k", 1);
    assert_eq!(doc.read_integer(["o", "k"]), Some(1));

    doc.ensure_object("o").put("j", 2);
    let o = doc.read_object("o").expect("object present");
    assert_eq!(o.len(), 2);
    assert_eq!(Value::Object(o.clone()), json!({"k": 1, "j": 2}));
}

#[test]
fn test_ensure_replaces_other_kinds() {
    let mut doc = JsonDataUnit::from_json_str(r#"{"o":"scalar","a":{"not":"array"}}"#).expect("valid json");

    assert!(doc.ensure_object("o").is_empty());
    doc.ensure_array("a").push(json!(1));
    doc.ensure_array("a").push(json!(2));

    assert_eq!(doc.read_long_array("a").expect("longs"), Some(vec![1, 2]));
    assert_eq!(doc.read_object("o").map(|o| o.len()), Some(0));
}

#[test]
fn test_nested_ensure_chain() {
    let mut doc = JsonDataUnit::new();
    doc.ensure_object("a").ensure_object("b").ensure_array("c").push(json!("deep"));
    assert_eq!(doc.read_string_array(["a", "b", "c"]).expect("strings"), Some(vec![Some("deep")]));
    assert_eq!(doc.to_string(), r#"{"a":{"b":{"c":["deep"]}}}"#);
}

#[test]
fn test_insertion_order_survives_replacement() {
    let mut doc = JsonDataUnit::new();
    doc.put("first", 1);
    doc.put("second", 2);
    doc.put("first", 10);
    let keys: Vec<&String> = doc.entries().map(|(k, _)| k).collect();
    assert_eq!(keys, ["first", "second"]);
}

#[test]
fn test_remove_key_through_nested_container_keeps_order() {
    let mut doc = JsonDataUnit::new();
    let nested = doc.ensure_object("o");
    nested.put("x", 1);
    nested.put("y", 2);
    nested.put("z", 3);
    nested.remove_key("x");

    let keys: Vec<&str> = doc.read_object("o").expect("object present").keys().map(String::as_str).collect();
    assert_eq!(keys, ["y", "z"]);
    assert_eq!(doc.to_string(), r#"{"o":{"y":2,"z":3}}"#);
}

#[test]
fn test_clear_entries() {
    let mut doc = JsonDataUnit::from_json_str(r#"{"x":1}"#).expect("valid json");
    doc.clear_entries();
    assert!(doc.is_empty());
}
