//! Keel JSON Prelude
//!
//! The types and traits needed to read, write, encode and capture. Only
//! canonical public API belongs here.

// Documents and their contracts
pub use crate::document::{
    DocumentView, JsonDataUnit, JsonObject, JsonObjectReloadable, JsonPointer, MappingBridge,
    MutableDocument, ReadOnlyEntity, Resolution, SerdeBridge, TypeTag,
};

// Encoding
pub use crate::codec::{BufferSerializable, DocumentEncoder, EncodeStyle, JsonSerializable};

// Error capture
pub use crate::capture::{CaptureSource, CapturedError, CapturedLevel, ErrorCapture, RaisedError};
pub use crate::config::CaptureConfig;
pub use crate::stack::{CallSite, IgnorableSet, StackFrame};

// Error types
pub use crate::error::{Error, JsonError};
