//! `CaptureBuilder`: fluent construction of error captures
//!
//! Starts from the process defaults and lets callers adjust the ignorable set,
//! summary handling and depth limit before capturing or building an encoder.

use keel_json_core::capture::{CaptureSource, CapturedError, ErrorCapture, RaisedError};
use keel_json_core::codec::{DocumentEncoder, EncodeStyle};
use keel_json_core::config::{CaptureConfig, Validator};
use keel_json_core::stack::IgnorableSet;
use keel_json_core::Result;

/// Fluent builder for [`ErrorCapture`] and [`DocumentEncoder`].
#[derive(Debug, Clone, Default)]
pub struct CaptureBuilder {
    pub(crate) config: CaptureConfig,
    /// Debug logging enabled flag
    pub(crate) debug_enabled: bool,
}

impl CaptureBuilder {
    /// Start from the process-default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    #[must_use]
    pub fn from_config(config: CaptureConfig) -> Self {
        Self {
            config,
            debug_enabled: false,
        }
    }

    /// Compact frames whose component starts with `prefix` as well.
    #[must_use]
    pub fn ignore(mut self, prefix: impl Into<String>) -> Self {
        self.config.ignorable.insert(prefix);
        self
    }

    /// Replace the ignorable set.
    #[must_use]
    pub fn ignorable(mut self, set: IgnorableSet) -> Self {
        self.config.ignorable = set;
        self
    }

    /// Write summary frames for compacted runs instead of dropping them.
    #[must_use]
    pub fn keep_ignored_stack(mut self) -> Self {
        self.config.omit_ignored_stack = false;
        self
    }

    #[must_use]
    pub fn omit_ignored_stack(mut self, omit: bool) -> Self {
        self.config.omit_ignored_stack = omit;
        self
    }

    #[must_use]
    pub fn max_cause_depth(mut self, depth: usize) -> Self {
        self.config.max_cause_depth = depth;
        self
    }

    /// Log the configuration when building.
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    /// # Errors
    ///
    /// [`keel_json_core::Error::Configuration`] when the configuration is invalid.
    pub fn build(self) -> Result<ErrorCapture> {
        self.config.validate()?;
        if self.debug_enabled {
            tracing::debug!(
                prefixes = self.config.ignorable.len(),
                omit = self.config.omit_ignored_stack,
                depth = self.config.max_cause_depth,
                "error capture built"
            );
        }
        Ok(ErrorCapture::new(self.config))
    }

    /// Build an encoder with the given layout.
    ///
    /// # Errors
    ///
    /// See [`CaptureBuilder::build`].
    pub fn encoder(self, style: EncodeStyle) -> Result<DocumentEncoder> {
        Ok(DocumentEncoder::new(self.build()?, style))
    }

    /// Build and capture `source` in one step.
    ///
    /// # Errors
    ///
    /// See [`CaptureBuilder::build`].
    pub fn capture(self, source: &dyn CaptureSource) -> Result<CapturedError> {
        Ok(self.build()?.capture(source))
    }

    /// Build and capture an [`anyhow::Error`].
    ///
    /// # Errors
    ///
    /// See [`CaptureBuilder::build`].
    pub fn wrap(self, error: &anyhow::Error) -> Result<CapturedError> {
        self.capture(&RaisedError::from_anyhow(error))
    }
}
