//! Error-capture configuration
//!
//! [`CaptureConfig`] carries everything the capture engine needs: the ignorable
//! prefixes, whether summarized runs are dropped, and the cause-depth limit. It
//! can be built in code with the `with_*` methods or loaded from a document:
//!
//! ```json
//! { "ignorable": ["std::", "tokio::"], "omit_ignored_stack": false, "max_cause_depth": 16 }
//! ```
//!
//! Missing fields take their defaults.

pub mod validation;

pub use validation::{ConfigResult, ConfigValidator, ConfigurationError, Validator};

use serde::{Deserialize, Serialize};

use crate::document::DocumentView;
use crate::error::Result;
use crate::stack::IgnorableSet;

/// Common configuration defaults
pub struct ConfigDefaults;

impl ConfigDefaults {
    pub const OMIT_IGNORED_STACK: bool = true;
    pub const MAX_CAUSE_DEPTH: usize = 64;
    pub const MAX_CAUSE_DEPTH_LIMIT: usize = 4096;
}

/// Settings for [`crate::capture::ErrorCapture`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Prefixes whose frames are compacted.
    pub ignorable: IgnorableSet,
    /// Drop compacted runs instead of writing summary frames.
    pub omit_ignored_stack: bool,
    /// Levels captured before the cause walk stops.
    pub max_cause_depth: usize,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            ignorable: IgnorableSet::process_default().clone(),
            omit_ignored_stack: ConfigDefaults::OMIT_IGNORED_STACK,
            max_cause_depth: ConfigDefaults::MAX_CAUSE_DEPTH,
        }
    }
}

impl CaptureConfig {
    #[must_use]
    pub fn new(ignorable: IgnorableSet) -> Self {
        Self {
            ignorable,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_ignorable(mut self, ignorable: IgnorableSet) -> Self {
        self.ignorable = ignorable;
        self
    }

    #[must_use]
    pub fn with_omit_ignored_stack(mut self, omit: bool) -> Self {
        self.omit_ignored_stack = omit;
        self
    }

    #[must_use]
    pub fn with_max_cause_depth(mut self, depth: usize) -> Self {
        self.max_cause_depth = depth;
        self
    }

    /// Load and validate a configuration held in a document.
    ///
    /// # Errors
    ///
    /// [`crate::Error::Codec`] when a field has the wrong shape and
    /// [`crate::Error::Configuration`] when validation fails.
    pub fn from_document<D: DocumentView + ?Sized>(document: &D) -> Result<Self> {
        let value = serde_json::Value::Object(document.as_json_object().clone());
        let config: CaptureConfig = serde_json::from_value(value)?;
        config.validate()?;
        tracing::debug!(
            prefixes = config.ignorable.len(),
            omit = config.omit_ignored_stack,
            depth = config.max_cause_depth,
            "capture configuration loaded"
        );
        Ok(config)
    }

    /// Same as [`CaptureConfig::from_document`] for JSON text.
    ///
    /// # Errors
    ///
    /// See [`CaptureConfig::from_document`]; also fails on text that is not an object.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::from_document(&crate::codec::text::parse_object(text)?)
    }
}

impl Validator for CaptureConfig {
    fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::validate_range(
            self.max_cause_depth,
            1,
            ConfigDefaults::MAX_CAUSE_DEPTH_LIMIT,
            "max_cause_depth",
        )?;
        ConfigValidator::validate_prefixes(self.ignorable.iter(), "ignorable")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_defaults() {
        let config = CaptureConfig::default();
        assert!(config.omit_ignored_stack);
        assert_eq!(config.max_cause_depth, 64);
        assert_eq!(&config.ignorable, IgnorableSet::process_default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config = CaptureConfig::from_json_str(r#"{"ignorable":["app::internal::"],"max_cause_depth":3}"#)
            .unwrap_or_else(|e| panic!("config should load: {e}"));
        assert_eq!(config.ignorable.iter().collect::<Vec<_>>(), ["app::internal::"]);
        assert_eq!(config.max_cause_depth, 3);
        assert!(config.omit_ignored_stack);
    }

    #[test]
    fn test_invalid_documents() {
        assert!(matches!(
            CaptureConfig::from_json_str(r#"{"max_cause_depth":0}"#),
            Err(Error::Configuration(ConfigurationError::InvalidParameter(_)))
        ));
        assert!(matches!(
            CaptureConfig::from_json_str(r#"{"omit_ignored_stack":"yes"}"#),
            Err(Error::Codec(_))
        ));
        assert!(matches!(
            CaptureConfig::from_json_str(r#"{"ignorable":[""]}"#),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_builders() {
        let config = CaptureConfig::new(IgnorableSet::new().with("x::"))
            .with_omit_ignored_stack(false)
            .with_max_cause_depth(2);
        assert_eq!(config.ignorable.len(), 1);
        assert!(!config.omit_ignored_stack);
        assert_eq!(config.max_cause_depth, 2);
    }
}
