//! JSON documents addressed by pointer
//!
//! This module provides the read contract ([`DocumentView`]), the mutation
//! contract ([`MutableDocument`]), the pointer type and its resolver, and the two
//! concrete document types: the read/write [`JsonDataUnit`] and the read-only
//! [`ReadOnlyEntity`].

mod data_unit;
pub mod mapping;
pub mod numeric;
pub mod path;
pub mod query;
mod read_only;
mod readable;
mod writable;

/// Insertion-ordered JSON object, the root of every document.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

pub use data_unit::{JsonDataUnit, JsonObjectReloadable};
pub use mapping::{BoxError, MappingBridge, SerdeBridge};
pub use path::JsonPointer;
pub use query::{QueryTarget, Resolution, TypeTag, locate, resolve};
pub use read_only::ReadOnlyEntity;
pub use readable::DocumentView;
pub use writable::MutableDocument;
