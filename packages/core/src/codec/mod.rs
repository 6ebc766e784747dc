//! Text and buffer encodings of documents.

pub mod encoder;
pub mod framing;
pub mod text;

pub use encoder::DocumentEncoder;
pub use framing::{BufferSerializable, LENGTH_PREFIX, read_frame, write_frame};
pub use text::{EncodeStyle, JsonSerializable, encode, parse_object, parse_object_slice};
