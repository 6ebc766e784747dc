pub mod constructors;
pub mod types;

pub use constructors::*;
pub use types::{Error, Result};

// Type alias mirroring the document naming used across the crate
pub type JsonError = Error;

pub use crate::config::ConfigurationError;
