//! Single-level mutation on top of [`DocumentView`].

use serde_json::Value;

use super::JsonObject;
use super::readable::DocumentView;

/// A document that can be changed in place.
///
/// Only top-level keys are mutated directly. Deeper mutation goes through the
/// containers handed out by [`MutableDocument::ensure_object`] and
/// [`MutableDocument::ensure_array`]: they are borrows into the parent tree, so
/// every change made through them is visible from the parent.
pub trait MutableDocument: DocumentView {
    fn as_json_object_mut(&mut self) -> &mut JsonObject;

    /// Create or replace the entry under `key`, returning the previous value.
    fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.as_json_object_mut().insert(key.into(), value.into())
    }

    /// Remove the entry under `key`, keeping the order of the others; absent
    /// keys are a no-op.
    fn remove_key(&mut self, key: &str) -> Option<Value> {
        self.as_json_object_mut().shift_remove(key)
    }

    /// The object under `key`, created empty when the key is absent or holds
    /// something other than an object.
    fn ensure_object(&mut self, key: impl Into<String>) -> &mut JsonObject {
        let slot = self
            .as_json_object_mut()
            .entry(key.into())
            .or_insert_with(|| Value::Object(JsonObject::new()));
        object_in(slot)
    }

    /// The array under `key`, created empty when the key is absent or holds
    /// something other than an array.
    fn ensure_array(&mut self, key: impl Into<String>) -> &mut Vec<Value> {
        let slot = self
            .as_json_object_mut()
            .entry(key.into())
            .or_insert_with(|| Value::Array(Vec::new()));
        array_in(slot)
    }

    /// Drop every entry.
    fn clear_entries(&mut self) {
        self.as_json_object_mut().clear();
    }
}

/// Recurses at most once: the second call sees an object.
fn object_in(slot: &mut Value) -> &mut JsonObject {
    match slot {
        Value::Object(object) => object,
        other => {
            tracing::debug!(found = %super::TypeTag::of(other), "replacing entry with an empty object");
            *other = Value::Object(JsonObject::new());
            object_in(other)
        }
    }
}

fn array_in(slot: &mut Value) -> &mut Vec<Value> {
    match slot {
        Value::Array(items) => items,
        other => {
            tracing::debug!(found = %super::TypeTag::of(other), "replacing entry with an empty array");
            *other = Value::Array(Vec::new());
            array_in(other)
        }
    }
}

impl MutableDocument for JsonObject {
    #[inline]
    fn as_json_object_mut(&mut self) -> &mut JsonObject {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ensure_object_replaces_wrong_kind_in_place() {
        let mut doc = JsonObject::new();
        doc.put("first", 1);
        doc.put("slot", "scalar");
        doc.put("last", 3);

        doc.ensure_object("slot").put("k", "v");

        let keys: Vec<&str> = doc.keys().map(String::as_str).collect();
        assert_eq!(keys, ["first", "slot", "last"]);
        assert_eq!(doc.read_string(["slot", "k"]), Some("v"));
    }

    #[test]
    fn test_nested_ensure_chain() {
        let mut doc = JsonObject::new();
        doc.ensure_object("a").ensure_object("b").ensure_array("c").push(json!(7));
        assert_eq!(doc.read_integer_array_required(["a", "b", "c"]).ok(), Some(vec![7]));
    }

    #[test]
    fn test_ensure_array_replaces_wrong_kind() {
        let mut doc = JsonObject::new();
        doc.put("tags", json!({"not": "an array"}));
        doc.ensure_array("tags").push(json!("a"));
        assert_eq!(doc.get("tags"), Some(&json!(["a"])));
        assert_eq!(doc.ensure_array("tags").len(), 1);
    }

    #[test]
    fn test_remove_key_absent_is_noop() {
        let mut doc = JsonObject::new();
        doc.put("a", true);
        assert_eq!(doc.remove_key("missing"), None);
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.remove_key("a"), Some(Value::Bool(true)));
        assert!(DocumentView::is_empty(&doc));
    }

    #[test]
    fn test_remove_key_keeps_order_in_nested_container() {
        let mut doc = JsonObject::new();
        let nested = doc.ensure_object("o");
        nested.put("x", 1);
        nested.put("y", 2);
        nested.put("z", 3);
        assert_eq!(nested.remove_key("x"), Some(json!(1)));

        let keys: Vec<&str> = nested.keys().map(String::as_str).collect();
        assert_eq!(keys, ["y", "z"]);
    }
}
