use super::types::Error;
use crate::document::{JsonPointer, TypeTag};

/// Creates an `Error` for a required read that found no value.
pub fn missing_value(pointer: JsonPointer) -> Error {
    Error::MissingValue { pointer }
}

/// Creates an `Error` for a typed-array element of the wrong kind.
pub fn element_mismatch(pointer: JsonPointer, index: usize, expected: TypeTag, found: TypeTag) -> Error {
    Error::ElementTypeMismatch {
        pointer,
        index,
        expected,
        found,
    }
}

/// Creates an `Error` for malformed RFC 6901 pointer text.
pub fn invalid_pointer(text: impl Into<String>, reason: &'static str) -> Error {
    Error::InvalidPointer {
        text: text.into(),
        reason,
    }
}

pub fn not_an_object(found: TypeTag) -> Error {
    Error::NotAnObject { found }
}

pub fn frame_truncated(offset: usize, needed: usize, available: usize) -> Error {
    Error::FrameTruncated {
        offset,
        needed,
        available,
    }
}
