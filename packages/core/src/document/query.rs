//! Pointer resolution with null vs missing vs wrong-type distinction
//!
//! [`resolve`] walks a pointer from a document root and reports whether a node
//! of the requested kind is present. It never mutates the document.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use super::JsonObject;
use super::path::{JsonPointer, parse_index};

/// Kind of a document node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
    /// Matches every node except `null`.
    Any,
}

impl TypeTag {
    /// Tag of a concrete node.
    #[inline]
    #[must_use]
    pub fn of(value: &Value) -> TypeTag {
        match value {
            Value::Null => TypeTag::Null,
            Value::Bool(_) => TypeTag::Boolean,
            Value::Number(_) => TypeTag::Number,
            Value::String(_) => TypeTag::String,
            Value::Array(_) => TypeTag::Array,
            Value::Object(_) => TypeTag::Object,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::Null => "null",
            TypeTag::Boolean => "boolean",
            TypeTag::Number => "number",
            TypeTag::String => "string",
            TypeTag::Array => "array",
            TypeTag::Object => "object",
            TypeTag::Any => "any",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of resolving a pointer for an expected kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<T> {
    /// A node of the expected kind is present.
    Found(T),
    /// Nothing exists at the pointer.
    Absent,
    /// A node exists but its kind differs from the expected one.
    TypeMismatch { found: TypeTag },
}

impl<T> Resolution<T> {
    /// Collapse to the lenient "value or no value" view used by scalar reads.
    #[inline]
    pub fn found(self) -> Option<T> {
        match self {
            Resolution::Found(value) => Some(value),
            Resolution::Absent | Resolution::TypeMismatch { .. } => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Resolution::Absent)
    }
}

/// A borrowed view that can be extracted from a resolved node.
pub trait QueryTarget<'a>: Sized {
    /// Kind this target expects.
    const TAG: TypeTag;

    fn from_value(value: &'a Value) -> Option<Self>;

    /// Extraction when the pointer is empty and the root object itself is the node.
    fn from_root(_root: &'a JsonObject) -> Option<Self> {
        None
    }
}

impl<'a> QueryTarget<'a> for &'a str {
    const TAG: TypeTag = TypeTag::String;

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_str()
    }
}

impl<'a> QueryTarget<'a> for bool {
    const TAG: TypeTag = TypeTag::Boolean;

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_bool()
    }
}

impl<'a> QueryTarget<'a> for &'a Number {
    const TAG: TypeTag = TypeTag::Number;

    fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }
}

impl<'a> QueryTarget<'a> for &'a JsonObject {
    const TAG: TypeTag = TypeTag::Object;

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_object()
    }

    fn from_root(root: &'a JsonObject) -> Option<Self> {
        Some(root)
    }
}

impl<'a> QueryTarget<'a> for &'a Vec<Value> {
    const TAG: TypeTag = TypeTag::Array;

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_array()
    }
}

impl<'a> QueryTarget<'a> for &'a Value {
    const TAG: TypeTag = TypeTag::Any;

    fn from_value(value: &'a Value) -> Option<Self> {
        if value.is_null() { None } else { Some(value) }
    }
}

/// Locate the node at `pointer` without checking its kind.
///
/// Returns `None` when any segment is missing, an index segment is not a decimal
/// number or is out of range, or a segment is applied to a scalar. The root
/// pointer has no `Value` node of its own and also yields `None`; callers that
/// need the root use [`resolve`].
pub fn locate<'a>(root: &'a JsonObject, pointer: &JsonPointer) -> Option<&'a Value> {
    let mut segments = pointer.iter();
    let first = segments.next()?;
    let mut current = root.get(first)?;
    for segment in segments {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(parse_index(segment)?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Resolve `pointer` against `root`, expecting the kind carried by `T`.
///
/// # Examples
///
/// ```
/// use keel_json_core::document::{JsonPointer, Resolution, TypeTag, resolve};
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": "x", "n": null}});
/// let root = doc.as_object().unwrap();
///
/// assert_eq!(resolve::<&str>(root, &JsonPointer::from(["a", "b"])), Resolution::Found("x"));
/// assert_eq!(resolve::<&str>(root, &JsonPointer::from(["a", "c"])), Resolution::Absent);
/// assert_eq!(
///     resolve::<&str>(root, &JsonPointer::from(["a", "n"])),
///     Resolution::TypeMismatch { found: TypeTag::Null }
/// );
/// ```
pub fn resolve<'a, T: QueryTarget<'a>>(root: &'a JsonObject, pointer: &JsonPointer) -> Resolution<T> {
    if pointer.is_root() {
        return match T::from_root(root) {
            Some(target) => Resolution::Found(target),
            None => Resolution::TypeMismatch {
                found: TypeTag::Object,
            },
        };
    }
    match locate(root, pointer) {
        None => Resolution::Absent,
        Some(node) => match T::from_value(node) {
            Some(target) => Resolution::Found(target),
            None => Resolution::TypeMismatch {
                found: TypeTag::of(node),
            },
        },
    }
}
