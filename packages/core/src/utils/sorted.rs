//! Order-normalized copies of objects and arrays.
//!
//! Object keys are sorted at every object nesting level. Array items are
//! sorted by their text (strings raw, everything else canonical JSON) but not
//! normalized themselves.

use serde_json::Value;

use crate::document::JsonObject;

/// Copy of `object` with keys sorted, recursively.
#[must_use]
pub fn object_with_sorted_keys(object: &JsonObject) -> JsonObject {
    let mut keys: Vec<&String> = object.keys().collect();
    keys.sort();
    let mut sorted = JsonObject::new();
    for key in keys {
        let value = match &object[key.as_str()] {
            Value::Object(inner) => Value::Object(object_with_sorted_keys(inner)),
            Value::Array(items) => Value::Array(array_with_sorted_items(items)),
            other => other.clone(),
        };
        sorted.insert(key.clone(), value);
    }
    sorted
}

/// Copy of `items` ordered by each item's text.
#[must_use]
pub fn array_with_sorted_items(items: &[Value]) -> Vec<Value> {
    let mut keyed: Vec<(String, &Value)> = items.iter().map(|item| (item_text(item), item)).collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, item)| item.clone()).collect()
}

/// Canonical text of [`object_with_sorted_keys`].
#[must_use]
pub fn json_for_object_with_sorted_keys(object: &JsonObject) -> String {
    Value::Object(object_with_sorted_keys(object)).to_string()
}

/// Canonical text of [`array_with_sorted_items`].
#[must_use]
pub fn json_for_array_with_sorted_items(items: &[Value]) -> String {
    Value::Array(array_with_sorted_items(items)).to_string()
}

fn item_text(item: &Value) -> String {
    match item {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> JsonObject {
        match value {
            Value::Object(object) => object,
            _ => panic!("object literal expected"),
        }
    }

    #[test]
    fn test_keys_sorted_at_every_level() {
        let input = object(json!({"b": 1, "a": {"z": true, "y": null}, "c": [3, 1, 2]}));
        assert_eq!(
            json_for_object_with_sorted_keys(&input),
            r#"{"a":{"y":null,"z":true},"b":1,"c":[1,2,3]}"#
        );
    }

    #[test]
    fn test_array_items_sorted_by_text() {
        let items = vec![json!("b"), json!(10), json!({"k": 1}), json!("a"), json!(2)];
        assert_eq!(json_for_array_with_sorted_items(&items), r#"[10,2,"a","b",{"k":1}]"#);
    }

    #[test]
    fn test_nested_array_objects_keep_their_order() {
        let items = vec![json!({"b": 1, "a": 2})];
        assert_eq!(json_for_array_with_sorted_items(&items), r#"[{"b":1,"a":2}]"#);
    }
}
