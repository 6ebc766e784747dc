//! Mapping bridge from document nodes to typed records.
//!
//! The bridge is a black box: given an object node it returns a record or fails.
//! Readers only ever see "a record" or "no record"; the bridge's own error type
//! never crosses the document boundary.

use std::panic::{AssertUnwindSafe, catch_unwind};

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::JsonObject;

/// Error type returned by a [`MappingBridge`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Converts an object node into a typed record.
pub trait MappingBridge {
    /// Map `node` into `T`.
    ///
    /// # Errors
    ///
    /// Any failure; callers downgrade it to absence.
    fn map<T: DeserializeOwned>(&self, node: &JsonObject) -> Result<T, BoxError>;
}

/// Bridge backed by serde deserialization.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeBridge;

impl MappingBridge for SerdeBridge {
    fn map<T: DeserializeOwned>(&self, node: &JsonObject) -> Result<T, BoxError> {
        serde_json::from_value(Value::Object(node.clone())).map_err(Into::into)
    }
}

/// Run the bridge, turning both errors and panics into `None`.
pub(crate) fn map_or_absent<B, T>(bridge: &B, node: &JsonObject) -> Option<T>
where
    B: MappingBridge + ?Sized,
    T: DeserializeOwned,
{
    match catch_unwind(AssertUnwindSafe(|| bridge.map::<T>(node))) {
        Ok(Ok(record)) => Some(record),
        Ok(Err(error)) => {
            tracing::debug!(
                record = std::any::type_name::<T>(),
                "mapping bridge failed, reporting absence: {}",
                error
            );
            None
        }
        Err(_) => {
            tracing::debug!(
                record = std::any::type_name::<T>(),
                "mapping bridge panicked, reporting absence"
            );
            None
        }
    }
}
