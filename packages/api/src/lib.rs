//! Keel JSON Public API
//!
//! Path-addressed JSON documents and captured error chains. Everything in
//! `keel_json_core` is re-exported; this crate adds fluent builders and the
//! [`Keel`] entry point with shortcuts that use the process defaults.
//!
//! ```
//! use keel_json::prelude::*;
//!
//! let error = anyhow::anyhow!("disk full").context("saving report");
//! let captured = keel_json::wrap(&error);
//! assert_eq!(captured.message(), Some("saving report"));
//! assert_eq!(captured.chain_len(), 2);
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

pub use builder::{CaptureBuilder, DocumentBuilder};

pub use keel_json_core::{Error, JsonError, Result, capture, codec, config, document, error, stack, utils};

pub mod prelude {
    //! Core prelude plus the fluent builders.
    pub use crate::builder::{CaptureBuilder, DocumentBuilder};
    pub use crate::Keel;
    pub use keel_json_core::prelude::*;
}

use bytes::{Bytes, BytesMut};
use keel_json_core::capture::{CapturedError, ErrorCapture, RaisedError};
use keel_json_core::codec::{BufferSerializable, JsonSerializable, text};
use keel_json_core::document::{DocumentView, JsonDataUnit, JsonObjectReloadable};
use keel_json_core::stack::IgnorableSet;

/// Main entry point providing static shortcuts
pub struct Keel;

impl Keel {
    /// Start configuring an error capture.
    #[must_use]
    pub fn capture() -> CaptureBuilder {
        CaptureBuilder::new()
    }

    /// Start building a document.
    #[must_use]
    pub fn document() -> DocumentBuilder {
        DocumentBuilder::new()
    }

    /// Configure the process-wide ignorable set. Succeeds at most once.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] when a default is already in place.
    pub fn configure_ignorable(set: IgnorableSet) -> Result<()> {
        IgnorableSet::configure_process_default(set)?;
        log::info!("keel ignorable set configured");
        Ok(())
    }

    /// Parse text holding a JSON object into a document.
    ///
    /// # Errors
    ///
    /// [`Error::Codec`] for malformed text, [`Error::NotAnObject`] for any other
    /// top-level value.
    pub fn parse(text: &str) -> Result<JsonDataUnit> {
        JsonDataUnit::from_json_str(text)
    }

    /// Canonical text of a document.
    ///
    /// # Errors
    ///
    /// [`Error::Codec`] if the writer fails.
    pub fn to_text<D: DocumentView + ?Sized>(document: &D) -> Result<String> {
        document.to_json_expression()
    }

    /// One frame holding `document`.
    ///
    /// # Errors
    ///
    /// See [`keel_json_core::codec::write_frame`].
    pub fn frame<D: BufferSerializable>(document: &D) -> Result<Bytes> {
        let mut buffer = BytesMut::new();
        document.write_to_buffer(&mut buffer)?;
        Ok(buffer.freeze())
    }

    /// Reload `document` from the first frame of `buffer`.
    ///
    /// # Errors
    ///
    /// See [`keel_json_core::codec::read_frame`].
    pub fn unframe<D: DocumentView + JsonObjectReloadable>(document: &mut D, buffer: &[u8]) -> Result<usize> {
        document.read_from_buffer(0, buffer)
    }
}

/// Capture an [`anyhow::Error`] with the process-default ignorable set,
/// omitting compacted runs.
#[must_use]
pub fn wrap(error: &anyhow::Error) -> CapturedError {
    ErrorCapture::default().capture(&RaisedError::from_anyhow(error))
}

/// Capture an [`anyhow::Error`] with an explicit ignorable set.
#[must_use]
pub fn wrap_with(error: &anyhow::Error, ignorable: &IgnorableSet, omit_ignored_stack: bool) -> CapturedError {
    capture::capture(&RaisedError::from_anyhow(error), ignorable, omit_ignored_stack)
}

/// Capture a standard error and its `source()` chain with the process defaults.
#[must_use]
pub fn wrap_std_error<E>(error: &E) -> CapturedError
where
    E: std::error::Error + ?Sized + 'static,
{
    ErrorCapture::default().capture(&RaisedError::from_std_error(error))
}

/// Parse text holding a JSON object.
///
/// # Errors
///
/// See [`Keel::parse`].
pub fn parse_object(text: &str) -> Result<document::JsonObject> {
    text::parse_object(text)
}
