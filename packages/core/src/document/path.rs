//! JSON Pointer paths for addressing nodes inside a document.
//!
//! A pointer is an ordered list of string segments. Each segment names an object
//! member or, when the current node is an array, a decimal index. The empty
//! pointer addresses the document root.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, invalid_pointer};

/// An immutable path into a JSON document.
///
/// Builder methods consume the pointer and return the extended one, so a
/// pointer never changes once it has been handed to a query.
///
/// # Examples
///
/// ```
/// use keel_json_core::document::JsonPointer;
///
/// let pointer = JsonPointer::root().append("users").append_index(0).append("name");
/// assert_eq!(pointer.to_string(), "/users/0/name");
/// assert_eq!(JsonPointer::parse("/users/0/name")?, pointer);
/// # Ok::<(), keel_json_core::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonPointer(Vec<String>);

impl JsonPointer {
    /// The empty pointer, resolving to the root.
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Append a member-name (or index text) segment.
    #[inline]
    #[must_use]
    pub fn append(mut self, segment: impl Into<String>) -> Self {
        self.0.push(segment.into());
        self
    }

    /// Append an array index segment.
    #[inline]
    #[must_use]
    pub fn append_index(mut self, index: usize) -> Self {
        self.0.push(index.to_string());
        self
    }

    /// Parse RFC 6901 text such as `/a/b~1c/0`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPointer`] when non-empty text does not start
    /// with `/` or contains an escape other than `~0` / `~1`.
    pub fn parse(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Ok(Self::root());
        }
        let Some(rest) = text.strip_prefix('/') else {
            return Err(invalid_pointer(text, "pointer must start with '/'"));
        };
        rest.split('/')
            .map(|raw| unescape(raw).ok_or_else(|| invalid_pointer(text, "bad '~' escape")))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Pointer to the containing node, `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<JsonPointer> {
        match self.0.split_last() {
            Some((_, head)) => Some(Self(head.to_vec())),
            None => None,
        }
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Interpret a segment as an array index: plain decimal digits, no leading zeros.
#[must_use]
pub fn parse_index(segment: &str) -> Option<usize> {
    let digits_only = !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit());
    if !digits_only || (segment.len() > 1 && segment.starts_with('0')) {
        return None;
    }
    segment.parse().ok()
}

fn unescape(raw: &str) -> Option<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '~' {
            match chars.next() {
                Some('0') => out.push('~'),
                Some('1') => out.push('/'),
                _ => return None,
            }
        } else {
            out.push(c);
        }
    }
    Some(out)
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.0 {
            f.write_str("/")?;
            f.write_str(&segment.replace('~', "~0").replace('/', "~1"))?;
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for JsonPointer {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for JsonPointer {
    fn from(segments: [S; N]) -> Self {
        segments.into_iter().collect()
    }
}

impl<S: AsRef<str>> From<&[S]> for JsonPointer {
    fn from(segments: &[S]) -> Self {
        segments.iter().map(|s| s.as_ref().to_owned()).collect()
    }
}

impl From<Vec<String>> for JsonPointer {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl From<&JsonPointer> for JsonPointer {
    fn from(pointer: &JsonPointer) -> Self {
        pointer.clone()
    }
}

/// A single member name addresses a top-level entry.
impl From<&str> for JsonPointer {
    fn from(key: &str) -> Self {
        Self(vec![key.to_owned()])
    }
}

impl From<String> for JsonPointer {
    fn from(key: String) -> Self {
        Self(vec![key])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_display() {
        let pointer = JsonPointer::root().append("a/b").append("m~n").append_index(3);
        assert_eq!(pointer.len(), 3);
        assert_eq!(pointer.to_string(), "/a~1b/m~0n/3");
        assert_eq!(JsonPointer::root().to_string(), "");
    }

    #[test]
    fn test_parse_round_trip() {
        let pointer = JsonPointer::parse("/a~1b/m~0n/3").unwrap_or_else(|e| panic!("parse failed: {e}"));
        assert_eq!(pointer.segments(), ["a/b", "m~n", "3"]);
        assert!(JsonPointer::parse("").map(|p| p.is_root()).unwrap_or(false));
        assert!(JsonPointer::parse("a/b").is_err());
        assert!(JsonPointer::parse("/a~2").is_err());
    }

    #[test]
    fn test_parse_index_rules() {
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("17"), Some(17));
        assert_eq!(parse_index("07"), None);
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index("+1"), None);
        assert_eq!(parse_index(""), None);
        assert_eq!(parse_index("x"), None);
    }

    #[test]
    fn test_parent() {
        let pointer = JsonPointer::from(["a", "b"]);
        assert_eq!(pointer.parent(), Some(JsonPointer::from(["a"])));
        assert_eq!(JsonPointer::root().parent(), None);
    }
}
