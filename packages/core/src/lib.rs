//! # Keel JSON Core
//!
//! Typed, path-addressed access to schemaless JSON documents and capture of error
//! chains (with compacted call stacks) into the same document model.
//!
//! ## Features
//!
//! - **JSON Pointer paths** built one segment at a time or parsed from RFC 6901 text
//! - **Lenient scalar reads** where missing, `null` and wrong-typed nodes are all "no value"
//! - **Strict typed-array reads** with positional `null` handling
//! - **Required reads** that turn absence into [`Error::MissingValue`]
//! - **Mutable documents** with `ensure_object` / `ensure_array` handing out live borrows
//! - **Stack compaction** collapsing runs of ignorable frames into summary nodes
//! - **Error capture** walking a cause chain iteratively with a cycle and depth guard
//!
//! ## Usage
//!
//! ```rust
//! use keel_json_core::prelude::*;
//! use serde_json::json;
//!
//! let mut unit = JsonDataUnit::from_json_str(r#"{"user":{"name":"ada","tags":["x",null]}}"#)?;
//! assert_eq!(unit.read_string(["user", "name"]), Some("ada"));
//! assert_eq!(unit.read_string(["user", "missing"]), None);
//!
//! unit.ensure_object("meta").put("version", json!(2));
//! assert_eq!(unit.read_integer(["meta", "version"]), Some(2));
//! # Ok::<(), keel_json_core::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod capture;
pub mod codec;
pub mod config;
pub mod document;
pub mod error;
pub mod stack;
pub mod utils;

// Prelude with canonical types
pub mod prelude;

pub use crate::error::{Error, JsonError, Result};
pub use crate::prelude::*;
