use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::JsonObject;
use super::readable::DocumentView;
use super::writable::MutableDocument;
use crate::codec::text;
use crate::error::Result;

/// Documents whose whole content can be swapped for another object.
pub trait JsonObjectReloadable {
    fn reload_data(&mut self, object: JsonObject);
}

/// General-purpose read/write document backed by one JSON object.
///
/// Serializes transparently as the wrapped object, so it can be embedded in any
/// serde-driven structure without a registration step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonDataUnit {
    object: JsonObject,
}

impl JsonDataUnit {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse canonical or pretty JSON text holding an object.
    ///
    /// # Errors
    ///
    /// [`crate::Error::Codec`] for malformed text, [`crate::Error::NotAnObject`]
    /// when the text holds another kind of value.
    pub fn from_json_str(text: &str) -> Result<Self> {
        text::parse_object(text).map(Self::from)
    }

    #[inline]
    #[must_use]
    pub fn into_inner(self) -> JsonObject {
        self.object
    }
}

impl DocumentView for JsonDataUnit {
    #[inline]
    fn as_json_object(&self) -> &JsonObject {
        &self.object
    }
}

impl MutableDocument for JsonDataUnit {
    #[inline]
    fn as_json_object_mut(&mut self) -> &mut JsonObject {
        &mut self.object
    }
}

impl JsonObjectReloadable for JsonDataUnit {
    fn reload_data(&mut self, object: JsonObject) {
        self.object = object;
    }
}

impl From<JsonObject> for JsonDataUnit {
    fn from(object: JsonObject) -> Self {
        Self { object }
    }
}

impl From<JsonDataUnit> for Value {
    fn from(unit: JsonDataUnit) -> Self {
        Value::Object(unit.object)
    }
}

impl<'a> IntoIterator for &'a JsonDataUnit {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.object.iter()
    }
}

/// Canonical single-line JSON.
impl fmt::Display for JsonDataUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        text::write_canonical(f, &self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reload_replaces_content() {
        let mut unit = JsonDataUnit::new();
        unit.put("old", 1);
        let mut fresh = JsonObject::new();
        fresh.insert("new".into(), json!(2));
        unit.reload_data(fresh);
        assert!(!unit.contains("old"));
        assert_eq!(unit.read_long("new"), Some(2));
    }

    #[test]
    fn test_display_is_canonical() {
        let mut unit = JsonDataUnit::new();
        unit.put("b", 1);
        unit.put("a", json!([true, null]));
        assert_eq!(unit.to_string(), r#"{"b":1,"a":[true,null]}"#);
    }

    #[test]
    fn test_iteration_order() {
        let unit = JsonDataUnit::from_json_str(r#"{"z":1,"m":2,"a":3}"#)
            .unwrap_or_else(|e| panic!("parse should succeed: {e}"));
        let keys: Vec<&str> = (&unit).into_iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["z", "m", "a"]);
    }
}
