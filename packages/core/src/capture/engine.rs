//! The capture walk.

use serde_json::{Value, json};

use super::captured::CapturedError;
use super::source::CaptureSource;
use crate::config::CaptureConfig;
use crate::document::JsonObject;
use crate::stack::{IgnorableSet, StackCompactor};

/// Turns live error chains into [`CapturedError`] documents.
#[derive(Debug, Clone, Default)]
pub struct ErrorCapture {
    config: CaptureConfig,
}

impl ErrorCapture {
    #[must_use]
    pub fn new(config: CaptureConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    /// Capture `source` and every cause below it.
    ///
    /// Never fails. Every level is kept up to `max_cause_depth`; a longer (or
    /// self-referential) chain is cut there and the cut is logged.
    #[must_use]
    pub fn capture(&self, source: &dyn CaptureSource) -> CapturedError {
        let compactor = StackCompactor::new(&self.config.ignorable, self.config.omit_ignored_stack);
        capture_with(source, &compactor, self.config.max_cause_depth)
    }
}

/// Capture with an explicit ignorable set and the default depth limit.
#[must_use]
pub fn capture(source: &dyn CaptureSource, ignorable: &IgnorableSet, omit_ignored_stack: bool) -> CapturedError {
    let compactor = StackCompactor::new(ignorable, omit_ignored_stack);
    capture_with(source, &compactor, crate::config::ConfigDefaults::MAX_CAUSE_DEPTH)
}

fn capture_with(source: &dyn CaptureSource, compactor: &StackCompactor<'_>, max_depth: usize) -> CapturedError {
    let max_depth = max_depth.max(1);
    let mut levels: Vec<JsonObject> = Vec::new();
    let mut current = Some(source);

    while let Some(level) = current {
        if levels.len() >= max_depth {
            tracing::warn!(max_depth, "cause chain truncated at depth limit");
            break;
        }
        levels.push(level_node(level, compactor));
        current = level.cause();
    }

    let root = levels
        .into_iter()
        .rev()
        .reduce(|inner, mut outer| {
            outer.insert("cause".to_owned(), Value::Object(inner));
            outer
        })
        .unwrap_or_default();
    CapturedError::from_levels(root)
}

fn level_node(level: &dyn CaptureSource, compactor: &StackCompactor<'_>) -> JsonObject {
    let stack: Vec<Value> = match level.call_sites() {
        Some(sites) => compactor
            .compact(&sites)
            .iter()
            .map(|frame| Value::Object(frame.to_node()))
            .collect(),
        None => {
            tracing::debug!(class = %level.class_name(), "stack unreadable, writing empty stack");
            Vec::new()
        }
    };
    let node = json!({
        "class": level.class_name(),
        "message": level.message(),
        "stack": stack,
        "cause": null,
    });
    match node {
        Value::Object(object) => object,
        _ => JsonObject::new(),
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;
    use crate::capture::RaisedError;
    use crate::document::DocumentView;
    use crate::stack::{CallSite, StackFrame};

    /// A source whose cause is itself.
    struct Looping;

    struct Inner;

    /// Holds its cause by value, so both share an address.
    struct Wrap {
        inner: Inner,
    }

    impl CaptureSource for Inner {
        fn class_name(&self) -> Cow<'_, str> {
            Cow::Borrowed("Inner")
        }
        fn message(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed("inner failed"))
        }
        fn call_sites(&self) -> Option<Vec<CallSite>> {
            None
        }
        fn cause(&self) -> Option<&dyn CaptureSource> {
            None
        }
    }

    impl CaptureSource for Wrap {
        fn class_name(&self) -> Cow<'_, str> {
            Cow::Borrowed("Wrap")
        }
        fn message(&self) -> Option<Cow<'_, str>> {
            None
        }
        fn call_sites(&self) -> Option<Vec<CallSite>> {
            None
        }
        fn cause(&self) -> Option<&dyn CaptureSource> {
            Some(&self.inner)
        }
    }

    impl CaptureSource for Looping {
        fn class_name(&self) -> Cow<'_, str> {
            Cow::Borrowed("Looping")
        }
        fn message(&self) -> Option<Cow<'_, str>> {
            None
        }
        fn call_sites(&self) -> Option<Vec<CallSite>> {
            None
        }
        fn cause(&self) -> Option<&dyn CaptureSource> {
            Some(self)
        }
    }

    #[test]
    fn test_single_level_shape() {
        let raised = RaisedError::new("Boom")
            .with_call_sites(vec![CallSite::new("std::rt", "lang_start"), CallSite::new("app", "main")]);
        let captured = capture(&raised, &IgnorableSet::builtin(), false);
        assert_eq!(
            Value::from(captured),
            json!({
                "class": "Boom",
                "message": null,
                "stack": [
                    {"type": "ignored", "package": "std::", "count": 1},
                    {"type": "call", "class": "app", "method": "main", "file": null, "line": -1},
                ],
                "cause": null,
            })
        );
    }

    #[test]
    fn test_cycle_is_cut_at_depth_limit() {
        let captured = ErrorCapture::new(CaptureConfig::default().with_max_cause_depth(4)).capture(&Looping);
        assert_eq!(captured.chain_len(), 4);
        assert!(captured.levels().iter().all(|level| level.class_name() == "Looping"));
        assert!(captured.is_null(["cause", "cause", "cause", "cause"]));
        assert!(captured.stack().is_empty());
    }

    #[test]
    fn test_cause_stored_by_value_is_kept() {
        let wrap = Wrap { inner: Inner };
        let captured = ErrorCapture::default().capture(&wrap);
        assert_eq!(captured.chain_len(), 2);
        assert_eq!(captured.class_name(), "Wrap");
        let cause = captured.cause().unwrap_or_else(|| panic!("cause expected"));
        assert_eq!(cause.class_name(), "Inner");
        assert_eq!(cause.message(), Some("inner failed"));
    }

    #[test]
    fn test_depth_limit() {
        let chain = (0..5).fold(RaisedError::new("L0"), |inner, i| {
            RaisedError::new(format!("L{}", i + 1)).with_cause(inner)
        });
        let capture = ErrorCapture::new(CaptureConfig::default().with_max_cause_depth(3));
        let captured = capture.capture(&chain);
        assert_eq!(captured.chain_len(), 3);
        assert_eq!(captured.class_name(), "L5");
        assert_eq!(ErrorCapture::default().capture(&chain).chain_len(), 6);
    }

    #[test]
    fn test_omit_uses_config() {
        let raised = RaisedError::new("E").with_call_sites(vec![CallSite::new("core::panic", "p")]);
        let omitted = ErrorCapture::new(CaptureConfig::new(IgnorableSet::builtin())).capture(&raised);
        assert!(omitted.stack().is_empty());
        let kept = ErrorCapture::new(CaptureConfig::new(IgnorableSet::new())).capture(&raised);
        assert_eq!(kept.stack(), vec![StackFrame::from(&CallSite::new("core::panic", "p"))]);
    }
}
