//! Read-only document produced by a capture.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::document::{DocumentView, JsonObject};
use crate::stack::StackFrame;

/// A captured error chain.
///
/// Each level is an object `{"class", "message", "stack", "cause"}` where `cause`
/// holds the next level or `null`. The document is fixed at capture time and only
/// exposes read access.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CapturedError {
    object: JsonObject,
}

impl CapturedError {
    pub(crate) fn from_levels(object: JsonObject) -> Self {
        Self { object }
    }

    /// Re-wrap a document holding a captured error, e.g. after decoding it.
    ///
    /// Returns `None` unless the top level has a string `class`.
    #[must_use]
    pub fn from_document(object: JsonObject) -> Option<Self> {
        object.read_string("class")?;
        Some(Self { object })
    }

    /// The outermost level.
    #[must_use]
    pub fn root(&self) -> CapturedLevel<'_> {
        CapturedLevel { node: &self.object }
    }

    #[must_use]
    pub fn class_name(&self) -> &str {
        self.root().class_name()
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.root().message()
    }

    #[must_use]
    pub fn stack(&self) -> Vec<StackFrame> {
        self.root().stack()
    }

    #[must_use]
    pub fn cause(&self) -> Option<CapturedLevel<'_>> {
        self.root().cause()
    }

    /// Every level, outermost first.
    #[must_use]
    pub fn levels(&self) -> Vec<CapturedLevel<'_>> {
        let mut levels = vec![self.root()];
        while let Some(next) = levels.last().and_then(CapturedLevel::cause) {
            levels.push(next);
        }
        levels
    }

    #[must_use]
    pub fn chain_len(&self) -> usize {
        self.levels().len()
    }

    #[must_use]
    pub fn into_inner(self) -> JsonObject {
        self.object
    }
}

impl DocumentView for CapturedError {
    fn as_json_object(&self) -> &JsonObject {
        &self.object
    }
}

impl From<CapturedError> for Value {
    fn from(captured: CapturedError) -> Self {
        Value::Object(captured.object)
    }
}

impl fmt::Display for CapturedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::codec::text::write_canonical(f, &self.object)
    }
}

/// Borrowed view of one level of a [`CapturedError`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapturedLevel<'a> {
    node: &'a JsonObject,
}

impl<'a> CapturedLevel<'a> {
    #[must_use]
    pub fn class_name(&self) -> &'a str {
        self.node.read_string("class").unwrap_or_default()
    }

    #[must_use]
    pub fn message(&self) -> Option<&'a str> {
        self.node.read_string("message")
    }

    /// Frames of this level; nodes that are not frames are skipped.
    #[must_use]
    pub fn stack(&self) -> Vec<StackFrame> {
        self.node
            .read_array("stack")
            .into_iter()
            .flatten()
            .filter_map(Value::as_object)
            .filter_map(StackFrame::from_node)
            .collect()
    }

    #[must_use]
    pub fn cause(&self) -> Option<CapturedLevel<'a>> {
        self.node.read_object("cause").map(|node| CapturedLevel { node })
    }
}

impl DocumentView for CapturedLevel<'_> {
    fn as_json_object(&self) -> &JsonObject {
        self.node
    }
}
