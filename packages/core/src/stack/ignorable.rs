//! Component prefixes whose frames are compacted away.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::config::ConfigurationError;

/// Prefixes of Rust runtime and executor frames.
pub const BUILTIN_IGNORABLE_PREFIXES: &[&str] = &[
    "std::",
    "core::",
    "alloc::",
    "<std::",
    "<core::",
    "<alloc::",
    "__rust",
    "tokio::",
];

static PROCESS_DEFAULT: OnceLock<IgnorableSet> = OnceLock::new();

/// Ordered set of component-name prefixes.
///
/// Order matters when several prefixes match the same component: the first one
/// inserted labels the compacted run. Inserting a prefix that is already present
/// is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct IgnorableSet {
    prefixes: Vec<String>,
}

impl IgnorableSet {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in runtime prefixes.
    #[must_use]
    pub fn builtin() -> Self {
        BUILTIN_IGNORABLE_PREFIXES.iter().copied().collect()
    }

    /// Configure the process-wide default. Succeeds at most once per process.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::Conflict`] when a default is already in place, either
    /// from an earlier call or because [`IgnorableSet::process_default`] already
    /// fell back to the built-in set.
    pub fn configure_process_default(set: IgnorableSet) -> Result<(), ConfigurationError> {
        PROCESS_DEFAULT.set(set).map_err(|rejected| {
            log::warn!(
                "ignoring process default ignorable set ({} prefixes): already configured",
                rejected.len()
            );
            ConfigurationError::Conflict("process default ignorable set already configured".into())
        })?;
        log::debug!("process default ignorable set configured");
        Ok(())
    }

    /// The process-wide default, falling back to [`IgnorableSet::builtin`].
    pub fn process_default() -> &'static IgnorableSet {
        PROCESS_DEFAULT.get_or_init(IgnorableSet::builtin)
    }

    /// Add `prefix` unless already present. Returns whether it was added.
    pub fn insert(&mut self, prefix: impl Into<String>) -> bool {
        let prefix = prefix.into();
        if self.prefixes.contains(&prefix) {
            return false;
        }
        self.prefixes.push(prefix);
        true
    }

    #[must_use]
    pub fn with(mut self, prefix: impl Into<String>) -> Self {
        self.insert(prefix);
        self
    }

    /// First prefix, in insertion order, that `component` starts with.
    #[must_use]
    pub fn matching_prefix(&self, component: &str) -> Option<&str> {
        self.prefixes
            .iter()
            .map(String::as_str)
            .find(|prefix| component.starts_with(prefix))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for IgnorableSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = IgnorableSet::new();
        for prefix in iter {
            set.insert(prefix);
        }
        set
    }
}

impl From<Vec<String>> for IgnorableSet {
    fn from(prefixes: Vec<String>) -> Self {
        prefixes.into_iter().collect()
    }
}

impl From<IgnorableSet> for Vec<String> {
    fn from(set: IgnorableSet) -> Self {
        set.prefixes
    }
}
