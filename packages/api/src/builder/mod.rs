//! Fluent builders for captures and documents.

pub mod core;
pub mod document;

pub use self::core::CaptureBuilder;
pub use self::document::DocumentBuilder;
