//! Stack compaction
//!
//! A single left-to-right pass over the raw call sites. Consecutive sites whose
//! component starts with the same ignorable prefix collapse into one
//! [`StackFrame::Summary`]; every other site is kept as a [`StackFrame::Call`].

use super::frame::{CallSite, StackFrame};
use super::ignorable::IgnorableSet;

/// What the compaction pass reports, in stack order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackEvent<'s, 'p> {
    /// A maximal run of `count` sites matching `prefix`.
    Ignored { prefix: &'p str, count: usize },
    /// A site matching no prefix.
    Call(&'s CallSite),
}

/// Run the compaction pass, feeding every event to `emit`.
pub fn walk_stack<'s, 'p>(
    sites: &'s [CallSite],
    ignorable: &'p IgnorableSet,
    mut emit: impl FnMut(StackEvent<'s, 'p>),
) {
    let mut pending: Option<(&'p str, usize)> = None;
    for site in sites {
        match ignorable.matching_prefix(&site.component) {
            None => {
                if let Some((prefix, count)) = pending.take() {
                    emit(StackEvent::Ignored { prefix, count });
                }
                emit(StackEvent::Call(site));
            }
            Some(matched) => {
                pending = match pending {
                    Some((prefix, count)) if prefix == matched => Some((prefix, count + 1)),
                    Some((prefix, count)) => {
                        emit(StackEvent::Ignored { prefix, count });
                        Some((matched, 1))
                    }
                    None => Some((matched, 1)),
                };
            }
        }
    }
    if let Some((prefix, count)) = pending {
        emit(StackEvent::Ignored { prefix, count });
    }
}

/// Visit `sites` with separate callbacks for ignored runs and kept sites.
pub fn filter_stack_trace<'s>(
    sites: &'s [CallSite],
    ignorable: &IgnorableSet,
    mut on_ignored: impl FnMut(&str, usize),
    mut on_call: impl FnMut(&'s CallSite),
) {
    walk_stack(sites, ignorable, |event| match event {
        StackEvent::Ignored { prefix, count } => on_ignored(prefix, count),
        StackEvent::Call(site) => on_call(site),
    });
}

/// Compacts raw call sites against an ignorable set.
#[derive(Debug, Clone, Copy)]
pub struct StackCompactor<'a> {
    ignorable: &'a IgnorableSet,
    omit_ignored_stack: bool,
}

impl<'a> StackCompactor<'a> {
    /// With `omit_ignored_stack`, runs of ignorable sites are dropped instead of
    /// being summarized.
    #[must_use]
    pub fn new(ignorable: &'a IgnorableSet, omit_ignored_stack: bool) -> Self {
        Self {
            ignorable,
            omit_ignored_stack,
        }
    }

    #[must_use]
    pub fn compact(&self, sites: &[CallSite]) -> Vec<StackFrame> {
        let mut frames = Vec::with_capacity(sites.len());
        walk_stack(sites, self.ignorable, |event| match event {
            StackEvent::Ignored { prefix, count } => {
                if !self.omit_ignored_stack {
                    frames.push(StackFrame::summary(prefix, count));
                }
            }
            StackEvent::Call(site) => frames.push(StackFrame::from(site)),
        });
        frames
    }
}

/// Compact `sites` in one call.
#[must_use]
pub fn compact(sites: &[CallSite], ignorable: &IgnorableSet, omit_ignored_stack: bool) -> Vec<StackFrame> {
    StackCompactor::new(ignorable, omit_ignored_stack).compact(sites)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sites(components: &[&str]) -> Vec<CallSite> {
        components
            .iter()
            .enumerate()
            .map(|(i, c)| CallSite::new(*c, format!("f{i}")))
            .collect()
    }

    #[test]
    fn test_different_prefixes_flush_separately() {
        let set: IgnorableSet = ["std::", "tokio::"].into_iter().collect();
        let frames = compact(&sites(&["std::a", "tokio::b", "tokio::c", "std::d"]), &set, false);
        assert_eq!(
            frames,
            vec![
                StackFrame::summary("std::", 1),
                StackFrame::summary("tokio::", 2),
                StackFrame::summary("std::", 1),
            ]
        );
    }

    #[test]
    fn test_filter_callbacks_fire_in_order() {
        let set: IgnorableSet = ["x::"].into_iter().collect();
        let input = sites(&["x::1", "app", "x::2", "x::3"]);
        let mut log = Vec::new();
        let mut calls = Vec::new();
        filter_stack_trace(
            &input,
            &set,
            |prefix, count| log.push(format!("{prefix}{count}")),
            |site| calls.push(site.component.clone()),
        );
        assert_eq!(log, ["x::1", "x::2"]);
        assert_eq!(calls, ["app"]);
    }

    #[test]
    fn test_no_adjacent_summaries_share_a_component() {
        let set: IgnorableSet = ["a", "b"].into_iter().collect();
        let frames = compact(&sites(&["a1", "a2", "b1", "a3", "a4", "a5", "c", "b2"]), &set, false);
        for pair in frames.windows(2) {
            if pair[0].is_summary() && pair[1].is_summary() {
                assert_ne!(pair[0].component(), pair[1].component());
            }
        }
        assert_eq!(frames.len(), 5);
    }

    #[test]
    fn test_empty_input() {
        assert!(compact(&[], &IgnorableSet::builtin(), false).is_empty());
    }
}
