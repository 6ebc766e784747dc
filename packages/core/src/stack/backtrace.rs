//! Call sites from `std::backtrace::Backtrace` text.
//!
//! The standard library renders a captured backtrace as numbered symbol lines,
//! each optionally followed by an `at file:line:column` line:
//!
//! ```text
//!    0: app::db::query
//!              at ./src/db.rs:42:9
//!    1: core::ops::function::FnOnce::call_once
//! ```

use std::backtrace::{Backtrace, BacktraceStatus};
use std::sync::LazyLock;

use regex::Regex;

use super::frame::CallSite;

static FRAME_LINE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+):\s+(.*?)\s*$").ok());

static LOCATION_LINE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\s+at\s+(.*?):(\d+)(?::(\d+))?\s*$").ok());

static SYMBOL_HASH: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"::h[0-9a-f]{16}$").ok());

/// Call sites of a captured backtrace, innermost call first.
///
/// Returns `None` when the backtrace was not captured (disabled or unsupported),
/// since there is no stack metadata to read.
#[must_use]
pub fn call_sites(backtrace: &Backtrace) -> Option<Vec<CallSite>> {
    match backtrace.status() {
        BacktraceStatus::Captured => parse_backtrace(&backtrace.to_string()),
        _ => None,
    }
}

/// Parse rendered backtrace text.
///
/// Returns `None` if the line patterns are unavailable; text without any frame
/// lines yields an empty list.
#[must_use]
pub fn parse_backtrace(text: &str) -> Option<Vec<CallSite>> {
    let frame_line = FRAME_LINE.as_ref()?;
    let location_line = LOCATION_LINE.as_ref()?;

    let mut sites: Vec<CallSite> = Vec::new();
    for line in text.lines() {
        if let Some(caps) = frame_line.captures(line) {
            let symbol = caps.get(2).map_or("", |m| m.as_str());
            let (component, member) = split_symbol(&strip_hash(symbol));
            sites.push(CallSite::new(component, member));
            continue;
        }
        let Some(caps) = location_line.captures(line) else {
            continue;
        };
        // only the first location belongs to the frame; inlined frames repeat it
        let Some(site) = sites.last_mut() else {
            continue;
        };
        if site.file.is_none() {
            site.file = caps.get(1).map(|m| m.as_str().to_owned());
            site.line = caps.get(2).and_then(|m| m.as_str().parse().ok());
        }
    }
    Some(sites)
}

fn strip_hash(symbol: &str) -> String {
    match SYMBOL_HASH.as_ref() {
        Some(hash) => hash.replace(symbol, "").into_owned(),
        None => symbol.to_owned(),
    }
}

/// Split a symbol path at its last `::` outside angle brackets.
///
/// Symbols without a separator are all component, so bare runtime symbols such
/// as `__rust_try` still match component prefixes.
#[must_use]
pub fn split_symbol(symbol: &str) -> (String, String) {
    let bytes = symbol.as_bytes();
    let mut depth = 0usize;
    let mut split = None;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                split = Some(i);
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }
    match split {
        Some(at) => (symbol[..at].to_owned(), symbol[at + 2..].to_owned()),
        None => (symbol.to_owned(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "   0: app::db::query::h0123456789abcdef
             at ./src/db.rs:42:9
   1: app::main::{{closure}}
             at ./src/main.rs:7:5
   2: <alloc::boxed::Box<F,A> as core::ops::function::FnOnce<Args>>::call_once
             at /rustc/abc/library/alloc/src/boxed.rs:1985:9
             at /rustc/abc/library/alloc/src/boxed.rs:1990:1
   3: __rust_try
   4: std::rt::lang_start_internal
";

    #[test]
    fn test_parse_sample() {
        let sites = parse_backtrace(SAMPLE).unwrap_or_default();
        assert_eq!(sites.len(), 5);
        assert_eq!(sites[0], CallSite::new("app::db", "query").at("./src/db.rs", 42));
        assert_eq!(sites[1].member, "{{closure}}");
        assert_eq!(sites[1].component, "app::main");
        assert_eq!(
            sites[2].component,
            "<alloc::boxed::Box<F,A> as core::ops::function::FnOnce<Args>>"
        );
        assert_eq!(sites[2].line, Some(1985));
        assert_eq!(sites[3], CallSite::new("__rust_try", ""));
        assert_eq!(sites[4].component, "std::rt");
        assert_eq!(sites[4].file, None);
    }

    #[test]
    fn test_disabled_backtrace_is_unreadable() {
        assert_eq!(call_sites(&Backtrace::disabled()), None);
        assert_eq!(parse_backtrace("disabled backtrace"), Some(Vec::new()));
    }
}
