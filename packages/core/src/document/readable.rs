//! Typed, pointer-addressed reads over a JSON object.
//!
//! Every accessor is built on [`resolve`]. Scalar reads are lenient: a missing
//! node, a `null` node and a node of another kind all read as `None`. Typed-array
//! reads are strict per element and fail the whole read on the first element of
//! the wrong kind. `null` elements are kept as `None` in string and object arrays
//! and replaced by zero in numeric arrays.

use serde::de::DeserializeOwned;
use serde_json::{Number, Value};

use super::JsonObject;
use super::mapping::{MappingBridge, SerdeBridge, map_or_absent};
use super::numeric;
use super::path::JsonPointer;
use super::query::{QueryTarget, TypeTag, locate, resolve};
use crate::error::{Result, element_mismatch, missing_value};

/// Read-only view of a document whose root is a JSON object.
///
/// Implementors provide [`DocumentView::as_json_object`]; everything else has a
/// default implementation. Pointers are accepted as anything convertible into a
/// [`JsonPointer`]: a single key (`"name"`), an array of segments
/// (`["user", "tags", "0"]`) or a pointer value.
pub trait DocumentView {
    /// The backing object.
    fn as_json_object(&self) -> &JsonObject;

    /// Resolve `pointer` for any [`QueryTarget`], lenient on absence and mismatch.
    #[inline]
    fn read<'a, T: QueryTarget<'a>>(&'a self, pointer: impl Into<JsonPointer>) -> Option<T> {
        resolve::<T>(self.as_json_object(), &pointer.into()).found()
    }

    #[inline]
    fn read_string(&self, pointer: impl Into<JsonPointer>) -> Option<&str> {
        self.read::<&str>(pointer)
    }

    /// # Errors
    ///
    /// [`crate::Error::MissingValue`] when [`DocumentView::read_string`] yields `None`.
    fn read_string_required(&self, pointer: impl Into<JsonPointer>) -> Result<&str> {
        let pointer = pointer.into();
        self.read_string(&pointer).ok_or_else(|| missing_value(pointer))
    }

    #[inline]
    fn read_number(&self, pointer: impl Into<JsonPointer>) -> Option<&Number> {
        self.read::<&Number>(pointer)
    }

    /// # Errors
    ///
    /// [`crate::Error::MissingValue`] when no number is present.
    fn read_number_required(&self, pointer: impl Into<JsonPointer>) -> Result<&Number> {
        let pointer = pointer.into();
        self.read_number(&pointer).ok_or_else(|| missing_value(pointer))
    }

    /// Any number narrowed to `i64`.
    #[inline]
    fn read_long(&self, pointer: impl Into<JsonPointer>) -> Option<i64> {
        self.read_number(pointer).map(numeric::to_i64)
    }

    /// # Errors
    ///
    /// [`crate::Error::MissingValue`] when no number is present.
    fn read_long_required(&self, pointer: impl Into<JsonPointer>) -> Result<i64> {
        let pointer = pointer.into();
        self.read_long(&pointer).ok_or_else(|| missing_value(pointer))
    }

    /// Any number narrowed to `i32`; wide integers keep their low 32 bits.
    #[inline]
    fn read_integer(&self, pointer: impl Into<JsonPointer>) -> Option<i32> {
        self.read_number(pointer).map(numeric::to_i32)
    }

    /// # Errors
    ///
    /// [`crate::Error::MissingValue`] when no number is present.
    fn read_integer_required(&self, pointer: impl Into<JsonPointer>) -> Result<i32> {
        let pointer = pointer.into();
        self.read_integer(&pointer).ok_or_else(|| missing_value(pointer))
    }

    #[inline]
    fn read_float(&self, pointer: impl Into<JsonPointer>) -> Option<f32> {
        self.read_number(pointer).map(numeric::to_f32)
    }

    /// # Errors
    ///
    /// [`crate::Error::MissingValue`] when no number is present.
    fn read_float_required(&self, pointer: impl Into<JsonPointer>) -> Result<f32> {
        let pointer = pointer.into();
        self.read_float(&pointer).ok_or_else(|| missing_value(pointer))
    }

    #[inline]
    fn read_double(&self, pointer: impl Into<JsonPointer>) -> Option<f64> {
        self.read_number(pointer).map(numeric::to_f64)
    }

    /// # Errors
    ///
    /// [`crate::Error::MissingValue`] when no number is present.
    fn read_double_required(&self, pointer: impl Into<JsonPointer>) -> Result<f64> {
        let pointer = pointer.into();
        self.read_double(&pointer).ok_or_else(|| missing_value(pointer))
    }

    #[inline]
    fn read_boolean(&self, pointer: impl Into<JsonPointer>) -> Option<bool> {
        self.read::<bool>(pointer)
    }

    /// # Errors
    ///
    /// [`crate::Error::MissingValue`] when no boolean is present.
    fn read_boolean_required(&self, pointer: impl Into<JsonPointer>) -> Result<bool> {
        let pointer = pointer.into();
        self.read_boolean(&pointer).ok_or_else(|| missing_value(pointer))
    }

    /// Sub-object at `pointer`; the root pointer yields the backing object.
    #[inline]
    fn read_object(&self, pointer: impl Into<JsonPointer>) -> Option<&JsonObject> {
        self.read::<&JsonObject>(pointer)
    }

    /// # Errors
    ///
    /// [`crate::Error::MissingValue`] when no object is present.
    fn read_object_required(&self, pointer: impl Into<JsonPointer>) -> Result<&JsonObject> {
        let pointer = pointer.into();
        self.read_object(&pointer).ok_or_else(|| missing_value(pointer))
    }

    #[inline]
    fn read_array(&self, pointer: impl Into<JsonPointer>) -> Option<&Vec<Value>> {
        self.read::<&Vec<Value>>(pointer)
    }

    /// # Errors
    ///
    /// [`crate::Error::MissingValue`] when no array is present.
    fn read_array_required(&self, pointer: impl Into<JsonPointer>) -> Result<&Vec<Value>> {
        let pointer = pointer.into();
        self.read_array(&pointer).ok_or_else(|| missing_value(pointer))
    }

    /// Any non-null node.
    #[inline]
    fn read_value(&self, pointer: impl Into<JsonPointer>) -> Option<&Value> {
        self.read::<&Value>(pointer)
    }

    /// # Errors
    ///
    /// [`crate::Error::MissingValue`] when the node is missing or `null`.
    fn read_value_required(&self, pointer: impl Into<JsonPointer>) -> Result<&Value> {
        let pointer = pointer.into();
        self.read_value(&pointer).ok_or_else(|| missing_value(pointer))
    }

    /// Array of objects; `null` elements stay `None`.
    ///
    /// # Errors
    ///
    /// [`crate::Error::ElementTypeMismatch`] when an element is neither an object nor `null`.
    fn read_object_array(&self, pointer: impl Into<JsonPointer>) -> Result<Option<Vec<Option<&JsonObject>>>> {
        typed_array(
            self.as_json_object(),
            pointer.into(),
            TypeTag::Object,
            || None,
            |item| item.as_object().map(Some),
        )
    }

    /// # Errors
    ///
    /// Element mismatch as for [`DocumentView::read_object_array`], or
    /// [`crate::Error::MissingValue`] when no array is present.
    fn read_object_array_required(&self, pointer: impl Into<JsonPointer>) -> Result<Vec<Option<&JsonObject>>> {
        let pointer = pointer.into();
        self.read_object_array(&pointer)?.ok_or_else(|| missing_value(pointer))
    }

    /// Array of strings; `null` elements stay `None`.
    ///
    /// # Errors
    ///
    /// [`crate::Error::ElementTypeMismatch`] when an element is neither a string nor `null`.
    fn read_string_array(&self, pointer: impl Into<JsonPointer>) -> Result<Option<Vec<Option<&str>>>> {
        typed_array(
            self.as_json_object(),
            pointer.into(),
            TypeTag::String,
            || None,
            |item| item.as_str().map(Some),
        )
    }

    /// # Errors
    ///
    /// Element mismatch, or [`crate::Error::MissingValue`] when no array is present.
    fn read_string_array_required(&self, pointer: impl Into<JsonPointer>) -> Result<Vec<Option<&str>>> {
        let pointer = pointer.into();
        self.read_string_array(&pointer)?.ok_or_else(|| missing_value(pointer))
    }

    /// Array of numbers narrowed to `i32`; `null` elements become `0`.
    ///
    /// # Errors
    ///
    /// [`crate::Error::ElementTypeMismatch`] when an element is neither a number nor `null`.
    fn read_integer_array(&self, pointer: impl Into<JsonPointer>) -> Result<Option<Vec<i32>>> {
        typed_array(self.as_json_object(), pointer.into(), TypeTag::Number, || 0, |item| {
            number_of(item).map(numeric::to_i32)
        })
    }

    /// # Errors
    ///
    /// Element mismatch, or [`crate::Error::MissingValue`] when no array is present.
    fn read_integer_array_required(&self, pointer: impl Into<JsonPointer>) -> Result<Vec<i32>> {
        let pointer = pointer.into();
        self.read_integer_array(&pointer)?.ok_or_else(|| missing_value(pointer))
    }

    /// Array of numbers narrowed to `i64`; `null` elements become `0`.
    ///
    /// # Errors
    ///
    /// [`crate::Error::ElementTypeMismatch`] when an element is neither a number nor `null`.
    fn read_long_array(&self, pointer: impl Into<JsonPointer>) -> Result<Option<Vec<i64>>> {
        typed_array(self.as_json_object(), pointer.into(), TypeTag::Number, || 0, |item| {
            number_of(item).map(numeric::to_i64)
        })
    }

    /// # Errors
    ///
    /// Element mismatch, or [`crate::Error::MissingValue`] when no array is present.
    fn read_long_array_required(&self, pointer: impl Into<JsonPointer>) -> Result<Vec<i64>> {
        let pointer = pointer.into();
        self.read_long_array(&pointer)?.ok_or_else(|| missing_value(pointer))
    }

    /// Array of numbers as `f32`; `null` elements become `0.0`.
    ///
    /// # Errors
    ///
    /// [`crate::Error::ElementTypeMismatch`] when an element is neither a number nor `null`.
    fn read_float_array(&self, pointer: impl Into<JsonPointer>) -> Result<Option<Vec<f32>>> {
        typed_array(self.as_json_object(), pointer.into(), TypeTag::Number, || 0.0, |item| {
            number_of(item).map(numeric::to_f32)
        })
    }

    /// # Errors
    ///
    /// Element mismatch, or [`crate::Error::MissingValue`] when no array is present.
    fn read_float_array_required(&self, pointer: impl Into<JsonPointer>) -> Result<Vec<f32>> {
        let pointer = pointer.into();
        self.read_float_array(&pointer)?.ok_or_else(|| missing_value(pointer))
    }

    /// Array of numbers as `f64`; `null` elements become `0.0`.
    ///
    /// # Errors
    ///
    /// [`crate::Error::ElementTypeMismatch`] when an element is neither a number nor `null`.
    fn read_double_array(&self, pointer: impl Into<JsonPointer>) -> Result<Option<Vec<f64>>> {
        typed_array(self.as_json_object(), pointer.into(), TypeTag::Number, || 0.0, |item| {
            number_of(item).map(numeric::to_f64)
        })
    }

    /// # Errors
    ///
    /// Element mismatch, or [`crate::Error::MissingValue`] when no array is present.
    fn read_double_array_required(&self, pointer: impl Into<JsonPointer>) -> Result<Vec<f64>> {
        let pointer = pointer.into();
        self.read_double_array(&pointer)?.ok_or_else(|| missing_value(pointer))
    }

    /// Map the sub-object at `pointer` into `T` with serde.
    ///
    /// Deserialization failures are reported as `None`.
    fn read_entity<T: DeserializeOwned>(&self, pointer: impl Into<JsonPointer>) -> Option<T> {
        self.read_entity_with(&SerdeBridge, pointer)
    }

    /// Map the sub-object at `pointer` through `bridge`.
    ///
    /// Any bridge failure, including a panic inside the bridge, reads as `None`.
    fn read_entity_with<B, T>(&self, bridge: &B, pointer: impl Into<JsonPointer>) -> Option<T>
    where
        B: MappingBridge + ?Sized,
        T: DeserializeOwned,
    {
        let node = self.read_object(pointer)?;
        map_or_absent(bridge, node)
    }

    /// True when a node exists at `pointer`, `null` included.
    fn contains(&self, pointer: impl Into<JsonPointer>) -> bool {
        let pointer = pointer.into();
        pointer.is_root() || locate(self.as_json_object(), &pointer).is_some()
    }

    /// True when the node at `pointer` exists and is `null`.
    fn is_null(&self, pointer: impl Into<JsonPointer>) -> bool {
        locate(self.as_json_object(), &pointer.into()).is_some_and(Value::is_null)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.as_json_object().is_empty()
    }

    /// Entries in insertion order. Each call starts a fresh pass.
    #[inline]
    fn entries(&self) -> serde_json::map::Iter<'_> {
        self.as_json_object().iter()
    }
}

impl DocumentView for JsonObject {
    #[inline]
    fn as_json_object(&self) -> &JsonObject {
        self
    }
}

#[inline]
fn number_of(item: &Value) -> Option<&Number> {
    match item {
        Value::Number(n) => Some(n),
        _ => None,
    }
}

fn typed_array<'a, T>(
    root: &'a JsonObject,
    pointer: JsonPointer,
    expected: TypeTag,
    on_null: impl Fn() -> T,
    convert: impl Fn(&'a Value) -> Option<T>,
) -> Result<Option<Vec<T>>> {
    let Some(items) = resolve::<&Vec<Value>>(root, &pointer).found() else {
        return Ok(None);
    };
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            if item.is_null() {
                return Ok(on_null());
            }
            convert(item).ok_or_else(|| element_mismatch(pointer.clone(), index, expected, TypeTag::of(item)))
        })
        .collect::<Result<Vec<T>>>()
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            _ => JsonObject::new(),
        }
    }

    #[test]
    fn test_numeric_reads_narrow() {
        let doc = object(json!({"n": 4_294_967_297_i64, "f": 2.75}));
        assert_eq!(doc.read_long("n"), Some(4_294_967_297));
        assert_eq!(doc.read_integer("n"), Some(1));
        assert_eq!(doc.read_integer("f"), Some(2));
        assert_eq!(doc.read_float("f"), Some(2.75));
        assert_eq!(doc.read_number("f").and_then(Number::as_f64), Some(2.75));
    }

    #[test]
    fn test_contains_and_is_null() {
        let doc = object(json!({"a": null, "b": {"c": 1}}));
        assert!(doc.contains("a"));
        assert!(doc.is_null("a"));
        assert!(doc.contains(["b", "c"]));
        assert!(!doc.is_null(["b", "c"]));
        assert!(!doc.contains("z"));
        assert!(!doc.is_null("z"));
        assert!(doc.contains(JsonPointer::root()));
    }

    #[test]
    fn test_entries_restart() {
        let doc = object(json!({"x": 1, "y": 2}));
        let first: Vec<&String> = doc.entries().map(|(k, _)| k).collect();
        let second: Vec<&String> = doc.entries().map(|(k, _)| k).collect();
        assert_eq!(first, second);
        assert_eq!(first, ["x", "y"]);
    }
}
