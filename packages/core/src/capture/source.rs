//! Live errors as seen by the capture engine.

use std::any::type_name;
use std::backtrace::Backtrace;
use std::borrow::Cow;
use std::error::Error as StdError;

use crate::config::ConfigDefaults;
use crate::stack::{CallSite, call_sites};

/// Class name used for cause levels whose type cannot be recovered.
pub const DYN_ERROR_CLASS: &str = "dyn Error";

/// Class name used for the top level of an [`anyhow::Error`].
pub const ANYHOW_ERROR_CLASS: &str = "anyhow::Error";

/// Read access to one level of an error chain.
pub trait CaptureSource {
    /// Type or class name written as the level's `class`.
    fn class_name(&self) -> Cow<'_, str>;

    fn message(&self) -> Option<Cow<'_, str>>;

    /// Raw call sites in stack order, or `None` when the stack cannot be read.
    fn call_sites(&self) -> Option<Vec<CallSite>>;

    /// The next level of the chain.
    fn cause(&self) -> Option<&dyn CaptureSource>;
}

/// Owned snapshot of an error chain.
///
/// Built directly with the `with_*` methods, or from a live error with
/// [`RaisedError::from_std_error`] and [`RaisedError::from_anyhow`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaisedError {
    class_name: String,
    message: Option<String>,
    call_sites: Option<Vec<CallSite>>,
    cause: Option<Box<RaisedError>>,
}

impl RaisedError {
    #[must_use]
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            message: None,
            call_sites: None,
            cause: None,
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_call_sites(mut self, sites: Vec<CallSite>) -> Self {
        self.call_sites = Some(sites);
        self
    }

    /// Attach the call sites of `backtrace`; a backtrace that was not captured
    /// leaves the stack unreadable.
    #[must_use]
    pub fn with_backtrace(mut self, backtrace: &Backtrace) -> Self {
        self.call_sites = call_sites(backtrace);
        self
    }

    /// Attach the stack of the calling thread, regardless of `RUST_BACKTRACE`.
    #[must_use]
    pub fn with_current_backtrace(self) -> Self {
        self.with_backtrace(&Backtrace::force_capture())
    }

    #[must_use]
    pub fn with_cause(mut self, cause: RaisedError) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Snapshot a standard error and its `source()` chain.
    ///
    /// The top level is named after `E`. Causes are only known as trait objects:
    /// a [`std::io::Error`] cause is recognised by downcasting, any other cause
    /// is named by the leading identifier of its `Debug` output. That is the
    /// type name for structs and for derived tuple/struct errors, but only the
    /// variant name for enums (`NotFound`, not `ConfigError`), and falls back to
    /// [`DYN_ERROR_CLASS`] when the output does not start with an identifier.
    /// No stack metadata is available from `std::error::Error`.
    pub fn from_std_error<E>(error: &E) -> Self
    where
        E: StdError + ?Sized + 'static,
    {
        let top = RaisedError::new(type_name::<E>()).with_message(error.to_string());
        let causes = walk_sources(error.source());
        fold_chain(top, causes)
    }

    /// Snapshot an [`anyhow::Error`], including its backtrace when one was captured.
    pub fn from_anyhow(error: &anyhow::Error) -> Self {
        let root: &(dyn StdError + 'static) = error.as_ref();
        let top = RaisedError::new(source_class_name(root).unwrap_or_else(|| ANYHOW_ERROR_CLASS.to_owned()))
            .with_message(error.to_string())
            .with_backtrace(error.backtrace());
        let causes = walk_sources(root.source());
        fold_chain(top, causes)
    }

    /// Number of levels in this chain.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self.cause.as_deref();
        while let Some(level) = current {
            depth += 1;
            current = level.cause.as_deref();
        }
        depth
    }
}

impl CaptureSource for RaisedError {
    fn class_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.class_name)
    }

    fn message(&self) -> Option<Cow<'_, str>> {
        self.message.as_deref().map(Cow::Borrowed)
    }

    fn call_sites(&self) -> Option<Vec<CallSite>> {
        self.call_sites.clone()
    }

    fn cause(&self) -> Option<&dyn CaptureSource> {
        self.cause.as_deref().map(|cause| cause as &dyn CaptureSource)
    }
}

impl From<&anyhow::Error> for RaisedError {
    fn from(error: &anyhow::Error) -> Self {
        RaisedError::from_anyhow(error)
    }
}

impl From<anyhow::Error> for RaisedError {
    fn from(error: anyhow::Error) -> Self {
        RaisedError::from_anyhow(&error)
    }
}

/// Class of an error only known as a trait object.
fn source_class_name(error: &(dyn StdError + 'static)) -> Option<String> {
    // io::Error debugs as its private repr variant (`Custom`, `Os`, `Kind`).
    if error.is::<std::io::Error>() {
        return Some(type_name::<std::io::Error>().to_owned());
    }
    debug_class_name(error)
}

/// Leading identifier of an error's `Debug` output, e.g. `ParseIntError` for
/// `ParseIntError { kind: InvalidDigit }`.
fn debug_class_name(error: &dyn StdError) -> Option<String> {
    let debug = format!("{error:?}");
    let name: String = debug
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_' || *c == ':')
        .collect();
    let name = name.trim_end_matches(':');
    let starts_like_a_type = name.chars().next().is_some_and(|c| c.is_alphabetic() || c == '_');
    starts_like_a_type.then(|| name.to_owned())
}

fn walk_sources(mut current: Option<&(dyn StdError + 'static)>) -> Vec<RaisedError> {
    let mut levels = Vec::new();
    while let Some(error) = current {
        if levels.len() >= ConfigDefaults::MAX_CAUSE_DEPTH_LIMIT {
            tracing::warn!(levels = levels.len(), "error source chain truncated");
            break;
        }
        let class = source_class_name(error).unwrap_or_else(|| DYN_ERROR_CLASS.to_owned());
        levels.push(RaisedError::new(class).with_message(error.to_string()));
        current = error.source();
    }
    levels
}

fn fold_chain(mut top: RaisedError, causes: Vec<RaisedError>) -> RaisedError {
    top.cause = causes
        .into_iter()
        .rev()
        .reduce(|inner, outer| outer.with_cause(inner))
        .map(Box::new);
    top
}
