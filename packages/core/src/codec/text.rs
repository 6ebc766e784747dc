//! Canonical and pretty JSON text for documents.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::{DocumentView, JsonObject, TypeTag};
use crate::error::{Result, not_an_object};

/// Text layout produced by an encoder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodeStyle {
    /// Single line, no insignificant whitespace.
    #[default]
    Canonical,
    /// Indented multi-line layout.
    Pretty,
}

/// Documents that render themselves as JSON text.
///
/// Implemented for every [`DocumentView`].
pub trait JsonSerializable {
    /// # Errors
    ///
    /// [`crate::Error::Codec`] if the writer fails.
    fn to_json_expression(&self) -> Result<String>;

    /// # Errors
    ///
    /// [`crate::Error::Codec`] if the writer fails.
    fn to_formatted_json_expression(&self) -> Result<String>;
}

impl<D: DocumentView + ?Sized> JsonSerializable for D {
    fn to_json_expression(&self) -> Result<String> {
        encode(self.as_json_object(), EncodeStyle::Canonical)
    }

    fn to_formatted_json_expression(&self) -> Result<String> {
        encode(self.as_json_object(), EncodeStyle::Pretty)
    }
}

/// Encode an object with the given layout.
///
/// # Errors
///
/// [`crate::Error::Codec`] if the writer fails.
pub fn encode(object: &JsonObject, style: EncodeStyle) -> Result<String> {
    let text = match style {
        EncodeStyle::Canonical => serde_json::to_string(object)?,
        EncodeStyle::Pretty => serde_json::to_string_pretty(object)?,
    };
    Ok(text)
}

/// Parse text that must hold a JSON object.
///
/// # Errors
///
/// [`crate::Error::Codec`] for malformed text, [`crate::Error::NotAnObject`]
/// for any other top-level value.
pub fn parse_object(text: &str) -> Result<JsonObject> {
    into_object(serde_json::from_str(text)?)
}

/// Parse bytes that must hold a JSON object.
///
/// # Errors
///
/// Same as [`parse_object`].
pub fn parse_object_slice(bytes: &[u8]) -> Result<JsonObject> {
    into_object(serde_json::from_slice(bytes)?)
}

fn into_object(value: Value) -> Result<JsonObject> {
    match value {
        Value::Object(object) => Ok(object),
        other => Err(not_an_object(TypeTag::of(&other))),
    }
}

pub(crate) fn write_canonical(f: &mut fmt::Formatter<'_>, object: &JsonObject) -> fmt::Result {
    let text = serde_json::to_string(object).map_err(|_| fmt::Error)?;
    f.write_str(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_non_objects() {
        assert!(matches!(
            parse_object("[1,2]"),
            Err(crate::Error::NotAnObject { found: TypeTag::Array })
        ));
        assert!(matches!(parse_object("{"), Err(crate::Error::Codec(_))));
    }

    #[test]
    fn test_pretty_and_canonical_agree() {
        let object = parse_object(r#"{"a":{"b":[1,null,"x"]},"c":false}"#)
            .unwrap_or_else(|e| panic!("parse should succeed: {e}"));
        let canonical = encode(&object, EncodeStyle::Canonical).unwrap_or_default();
        let pretty = encode(&object, EncodeStyle::Pretty).unwrap_or_default();
        assert!(!canonical.contains('\n'));
        assert!(pretty.contains('\n'));
        assert_eq!(parse_object(&pretty).ok(), Some(object.clone()));
        assert_eq!(parse_object(&canonical).ok(), Some(object));
    }
}
