use std::fmt;

use serde::Serialize;

use super::JsonObject;
use super::readable::DocumentView;
use crate::codec::text;

/// Read-only document.
///
/// The wrapped object can be purified once at construction (copied, stripped of
/// sensitive fields, normalized) and is never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ReadOnlyEntity {
    object: JsonObject,
}

impl ReadOnlyEntity {
    #[inline]
    #[must_use]
    pub fn new(object: JsonObject) -> Self {
        Self { object }
    }

    /// Wrap `raw` after passing it through `purify`.
    #[must_use]
    pub fn purified(raw: JsonObject, purify: impl FnOnce(JsonObject) -> JsonObject) -> Self {
        Self::new(purify(raw))
    }

    /// Deep copy.
    #[inline]
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

impl DocumentView for ReadOnlyEntity {
    #[inline]
    fn as_json_object(&self) -> &JsonObject {
        &self.object
    }
}

impl From<JsonObject> for ReadOnlyEntity {
    fn from(object: JsonObject) -> Self {
        Self::new(object)
    }
}

impl fmt::Display for ReadOnlyEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        text::write_canonical(f, &self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_purifier_runs_once_at_construction() {
        let raw = match json!({"user": "ada", "password": "hunter2"}) {
            serde_json::Value::Object(map) => map,
            _ => JsonObject::new(),
        };
        let entity = ReadOnlyEntity::purified(raw, |mut object| {
            object.shift_remove("password");
            object
        });
        assert_eq!(entity.read_string("user"), Some("ada"));
        assert_eq!(entity.read_string("password"), None);

        let copy = entity.copy();
        assert_eq!(copy, entity);
        assert_eq!(copy.to_string(), r#"{"user":"ada"}"#);
    }
}
