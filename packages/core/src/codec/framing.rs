//! Length-prefixed framing of one encoded document
//!
//! A frame is `[4-byte big-endian signed length][canonical JSON bytes]`. Reading
//! at `pos` consumes exactly `4 + length` bytes and returns the position of the
//! next unread byte.

use bytes::{Buf, BufMut, BytesMut};

use super::text::parse_object_slice;
use crate::document::{DocumentView, JsonObject, JsonObjectReloadable};
use crate::error::{Error, Result, frame_truncated};

/// Size of the length prefix in bytes.
pub const LENGTH_PREFIX: usize = 4;

/// Append one frame holding `object` to `buffer`.
///
/// # Errors
///
/// [`Error::Codec`] if encoding fails, [`Error::FrameLength`] if the encoded
/// document does not fit a signed 32-bit length.
pub fn write_frame(object: &JsonObject, buffer: &mut BytesMut) -> Result<()> {
    let encoded = serde_json::to_vec(object)?;
    let length = i32::try_from(encoded.len())
        .map_err(|_| Error::FrameLength(i64::try_from(encoded.len()).unwrap_or(i64::MAX)))?;
    buffer.reserve(LENGTH_PREFIX + encoded.len());
    buffer.put_i32(length);
    buffer.put_slice(&encoded);
    Ok(())
}

/// Read the frame starting at `pos`.
///
/// # Errors
///
/// [`Error::FrameTruncated`] when the buffer ends before the frame does,
/// [`Error::FrameLength`] for a negative length, and codec errors for a payload
/// that is not a JSON object.
pub fn read_frame(buffer: &[u8], pos: usize) -> Result<(JsonObject, usize)> {
    let available = buffer.len().saturating_sub(pos);
    if available < LENGTH_PREFIX {
        return Err(frame_truncated(pos, LENGTH_PREFIX, available));
    }
    let mut prefix = &buffer[pos..pos + LENGTH_PREFIX];
    let length = prefix.get_i32();
    let length = usize::try_from(length).map_err(|_| Error::FrameLength(i64::from(length)))?;

    let start = pos + LENGTH_PREFIX;
    let remaining = buffer.len() - start;
    if remaining < length {
        return Err(frame_truncated(start, length, remaining));
    }
    let end = start + length;
    tracing::trace!(pos, length, "reading framed document");
    let object = parse_object_slice(&buffer[start..end])?;
    Ok((object, end))
}

/// Documents that can be written to and reloaded from a framed buffer.
pub trait BufferSerializable: DocumentView + JsonObjectReloadable {
    /// # Errors
    ///
    /// See [`write_frame`].
    fn write_to_buffer(&self, buffer: &mut BytesMut) -> Result<()> {
        write_frame(self.as_json_object(), buffer)
    }

    /// Replace this document with the frame at `pos`, returning the next position.
    ///
    /// # Errors
    ///
    /// See [`read_frame`]; the document is left untouched on error.
    fn read_from_buffer(&mut self, pos: usize, buffer: &[u8]) -> Result<usize> {
        let (object, next) = read_frame(buffer, pos)?;
        self.reload_data(object);
        Ok(next)
    }
}

impl<T: DocumentView + JsonObjectReloadable> BufferSerializable for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{JsonDataUnit, MutableDocument};

    #[test]
    fn test_frames_are_consumed_back_to_back() {
        let mut first = JsonDataUnit::new();
        first.put("seq", 1);
        let mut second = JsonDataUnit::new();
        second.put("seq", 2);

        let mut buffer = BytesMut::new();
        first.write_to_buffer(&mut buffer).unwrap_or_else(|e| panic!("write failed: {e}"));
        second.write_to_buffer(&mut buffer).unwrap_or_else(|e| panic!("write failed: {e}"));
        let encoded_len = r#"{"seq":1}"#.len();
        assert_eq!(&buffer[..4], &i32::try_from(encoded_len).unwrap_or(0).to_be_bytes());

        let mut reader = JsonDataUnit::new();
        let next = reader.read_from_buffer(0, &buffer).unwrap_or_else(|e| panic!("read failed: {e}"));
        assert_eq!(next, 4 + encoded_len);
        assert_eq!(reader.read_integer("seq"), Some(1));

        let end = reader.read_from_buffer(next, &buffer).unwrap_or_else(|e| panic!("read failed: {e}"));
        assert_eq!(end, buffer.len());
        assert_eq!(reader.read_integer("seq"), Some(2));
    }

    #[test]
    fn test_truncated_frames_fail_without_touching_target() {
        let mut unit = JsonDataUnit::new();
        unit.put("k", "v");
        let mut buffer = BytesMut::new();
        unit.write_to_buffer(&mut buffer).unwrap_or_else(|e| panic!("write failed: {e}"));

        let cut = &buffer[..buffer.len() - 1];
        let mut target = JsonDataUnit::new();
        target.put("keep", true);
        assert!(matches!(target.read_from_buffer(0, cut), Err(Error::FrameTruncated { .. })));
        assert_eq!(target.read_boolean("keep"), Some(true));

        assert!(matches!(read_frame(&buffer[..2], 0), Err(Error::FrameTruncated { needed: 4, .. })));
        assert!(matches!(read_frame(&buffer, buffer.len() + 10), Err(Error::FrameTruncated { .. })));
    }

    #[test]
    fn test_negative_length_is_rejected() {
        let mut buffer = BytesMut::new();
        buffer.put_i32(-1);
        assert!(matches!(read_frame(&buffer, 0), Err(Error::FrameLength(-1))));
    }
}
