//! Configuration validation.

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid configuration parameter: {0}")]
    InvalidParameter(String),

    #[error("Configuration conflict: {0}")]
    Conflict(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails:
    /// - `InvalidParameter` - if parameters are outside valid ranges
    /// - `Conflict` - if configuration settings conflict with each other
    fn validate(&self) -> ConfigResult<()>;
}

/// Common configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate numeric range
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` if the value is outside
    /// the specified range [min, max] (inclusive).
    pub fn validate_range<T>(value: T, min: T, max: T, name: &str) -> ConfigResult<()>
    where
        T: PartialOrd + std::fmt::Display + Copy,
    {
        if value < min || value > max {
            return Err(ConfigurationError::InvalidParameter(format!(
                "{name} must be between {min} and {max}, got {value}"
            )));
        }
        Ok(())
    }

    /// Validate that no prefix is empty
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` naming the position of the
    /// first empty prefix. An empty prefix would match every component.
    pub fn validate_prefixes<'a>(
        prefixes: impl IntoIterator<Item = &'a str>,
        name: &str,
    ) -> ConfigResult<()> {
        if let Some(position) = prefixes.into_iter().position(str::is_empty) {
            return Err(ConfigurationError::InvalidParameter(format!(
                "{name} contains an empty prefix at position {position}"
            )));
        }
        Ok(())
    }
}
