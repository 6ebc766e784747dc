use crate::config::ConfigurationError;
use crate::document::{JsonPointer, TypeTag};

/// A Result alias where the Err case is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by document reads, codecs and configuration.
///
/// Absence is never an error: optional reads return `None`. Only the `*_required`
/// accessors raise [`Error::MissingValue`] and only typed-array reads raise
/// [`Error::ElementTypeMismatch`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required read found nothing usable at the pointer.
    #[error("required value missing at {pointer}")]
    MissingValue { pointer: JsonPointer },

    /// A typed-array read met an element whose kind differs from the declared one.
    #[error("array at {pointer} has {found} at index {index}, expected {expected}")]
    ElementTypeMismatch {
        pointer: JsonPointer,
        index: usize,
        expected: TypeTag,
        found: TypeTag,
    },

    #[error("invalid JSON pointer {text:?}: {reason}")]
    InvalidPointer { text: String, reason: &'static str },

    #[error("JSON codec error: {0}")]
    Codec(#[from] serde_json::Error),

    /// Decoded text or frame holds a JSON value other than an object.
    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: TypeTag },

    #[error("frame truncated at offset {offset}: needed {needed} bytes, {available} available")]
    FrameTruncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("frame length {0} does not fit the 4-byte length prefix")]
    FrameLength(i64),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

impl Error {
    /// True for the failure raised by `*_required` accessors.
    #[must_use]
    pub fn is_missing_value(&self) -> bool {
        matches!(self, Error::MissingValue { .. })
    }

    #[must_use]
    pub fn is_element_mismatch(&self) -> bool {
        matches!(self, Error::ElementTypeMismatch { .. })
    }

    /// Pointer associated with a read failure, if any.
    #[must_use]
    pub fn pointer(&self) -> Option<&JsonPointer> {
        match self {
            Error::MissingValue { pointer } | Error::ElementTypeMismatch { pointer, .. } => {
                Some(pointer)
            }
            _ => None,
        }
    }
}
