//! `DocumentBuilder`: fluent construction of documents at pointer paths.

use keel_json_core::document::{JsonDataUnit, JsonObject, JsonPointer, MutableDocument};
use keel_json_core::{Error, Result};
use serde::Serialize;
use serde_json::Value;

/// Builds a [`JsonDataUnit`] by setting values at pointer paths.
///
/// Intermediate objects are created as needed; an intermediate holding a
/// non-object value is replaced by an object.
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    unit: JsonDataUnit,
}

impl DocumentBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `value` at the top-level `key`.
    #[must_use]
    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.unit.put(key, value);
        self
    }

    /// Set `value` at `pointer`, creating intermediate objects.
    ///
    /// Setting at the root pointer is a no-op.
    #[must_use]
    pub fn field_at(mut self, pointer: impl Into<JsonPointer>, value: impl Into<Value>) -> Self {
        let pointer = pointer.into();
        let Some((last, parents)) = pointer.segments().split_last() else {
            tracing::debug!("ignoring value set at the root pointer");
            return self;
        };
        let mut target: &mut JsonObject = self.unit.as_json_object_mut();
        for segment in parents {
            target = target.ensure_object(segment);
        }
        target.put(last, value);
        self
    }

    /// Merge the fields of a serializable record into the top level.
    ///
    /// # Errors
    ///
    /// [`Error::Codec`] when serialization fails and [`Error::NotAnObject`] when
    /// the record does not serialize to an object.
    pub fn merge<T: Serialize + ?Sized>(mut self, record: &T) -> Result<Self> {
        match serde_json::to_value(record)? {
            Value::Object(fields) => {
                for (key, value) in fields {
                    self.unit.put(key, value);
                }
                Ok(self)
            }
            other => Err(Error::NotAnObject {
                found: keel_json_core::document::TypeTag::of(&other),
            }),
        }
    }

    #[must_use]
    pub fn build(self) -> JsonDataUnit {
        self.unit
    }
}
