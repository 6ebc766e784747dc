//! Encoder for documents and captured errors.

use bytes::BytesMut;
use serde::Serialize;
use serde_json::Value;

use super::framing::write_frame;
use super::text::{EncodeStyle, encode};
use crate::capture::{CaptureSource, CapturedError, ErrorCapture};
use crate::document::{DocumentView, JsonObject, TypeTag};
use crate::error::{Result, not_an_object};

/// Encodes documents with a fixed layout and captures errors with an owned
/// [`ErrorCapture`].
#[derive(Debug, Clone, Default)]
pub struct DocumentEncoder {
    capture: ErrorCapture,
    style: EncodeStyle,
}

impl DocumentEncoder {
    #[must_use]
    pub fn new(capture: ErrorCapture, style: EncodeStyle) -> Self {
        Self { capture, style }
    }

    #[must_use]
    pub fn canonical(capture: ErrorCapture) -> Self {
        Self::new(capture, EncodeStyle::Canonical)
    }

    #[must_use]
    pub fn pretty(capture: ErrorCapture) -> Self {
        Self::new(capture, EncodeStyle::Pretty)
    }

    #[must_use]
    pub fn style(&self) -> EncodeStyle {
        self.style
    }

    #[must_use]
    pub fn error_capture(&self) -> &ErrorCapture {
        &self.capture
    }

    /// # Errors
    ///
    /// [`crate::Error::Codec`] if the writer fails.
    pub fn encode<D: DocumentView + ?Sized>(&self, document: &D) -> Result<String> {
        encode(document.as_json_object(), self.style)
    }

    /// Capture `source` and encode the result.
    ///
    /// # Errors
    ///
    /// [`crate::Error::Codec`] if the writer fails.
    pub fn encode_error(&self, source: &dyn CaptureSource) -> Result<String> {
        self.encode(&self.capture_error(source))
    }

    #[must_use]
    pub fn capture_error(&self, source: &dyn CaptureSource) -> CapturedError {
        self.capture.capture(source)
    }

    /// Append `document` to `buffer` as one frame. Frames are always canonical.
    ///
    /// # Errors
    ///
    /// See [`write_frame`].
    pub fn encode_to_frame<D: DocumentView + ?Sized>(&self, document: &D, buffer: &mut BytesMut) -> Result<()> {
        write_frame(document.as_json_object(), buffer)
    }

    /// Encode any serializable value that serializes to a JSON object.
    ///
    /// # Errors
    ///
    /// [`crate::Error::Codec`] when serialization fails and
    /// [`crate::Error::NotAnObject`] when `value` is not object-shaped.
    pub fn encode_serialize<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        match serde_json::to_value(value)? {
            Value::Object(object) => encode(&object, self.style),
            other => Err(not_an_object(TypeTag::of(&other))),
        }
    }

    /// Same as [`DocumentEncoder::encode_serialize`], returning the object.
    ///
    /// # Errors
    ///
    /// See [`DocumentEncoder::encode_serialize`].
    pub fn to_object<T: Serialize + ?Sized>(&self, value: &T) -> Result<JsonObject> {
        match serde_json::to_value(value)? {
            Value::Object(object) => Ok(object),
            other => Err(not_an_object(TypeTag::of(&other))),
        }
    }
}
