//! Call sites and compacted stack frames.

use serde_json::{Value, json};

use crate::document::{DocumentView, JsonObject};

/// Line number written for frames whose line is unknown.
pub const UNKNOWN_LINE: i64 = -1;

/// One raw call site, as read from an error's stack metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallSite {
    /// Module path (or type) that owns the called member.
    pub component: String,
    pub member: String,
    pub file: Option<String>,
    pub line: Option<u32>,
}

impl CallSite {
    #[must_use]
    pub fn new(component: impl Into<String>, member: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            member: member.into(),
            file: None,
            line: None,
        }
    }

    #[must_use]
    pub fn at(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = Some(file.into());
        self.line = Some(line);
        self
    }
}

/// A unit of compacted stack information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackFrame {
    /// A real call site.
    Call {
        component: String,
        member: String,
        file: Option<String>,
        line: Option<u32>,
    },
    /// A run of `count` consecutive suppressed call sites whose component
    /// starts with `component`.
    Summary { component: String, count: usize },
}

impl StackFrame {
    #[must_use]
    pub fn summary(component: impl Into<String>, count: usize) -> Self {
        StackFrame::Summary {
            component: component.into(),
            count,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_summary(&self) -> bool {
        matches!(self, StackFrame::Summary { .. })
    }

    #[must_use]
    pub fn component(&self) -> &str {
        match self {
            StackFrame::Call { component, .. } | StackFrame::Summary { component, .. } => component,
        }
    }

    /// Document node for this frame.
    ///
    /// Calls become `{"type":"call","class","method","file","line"}` and summaries
    /// `{"type":"ignored","package","count"}`.
    #[must_use]
    pub fn to_node(&self) -> JsonObject {
        let node = match self {
            StackFrame::Call {
                component,
                member,
                file,
                line,
            } => json!({
                "type": "call",
                "class": component,
                "method": member,
                "file": file,
                "line": line.map_or(UNKNOWN_LINE, i64::from),
            }),
            StackFrame::Summary { component, count } => json!({
                "type": "ignored",
                "package": component,
                "count": count,
            }),
        };
        match node {
            Value::Object(object) => object,
            _ => JsonObject::new(),
        }
    }

    /// Read a frame back from its document node.
    ///
    /// Returns `None` for nodes without a recognised `type` or without the
    /// fields that type requires.
    #[must_use]
    pub fn from_node(node: &JsonObject) -> Option<Self> {
        match node.read_string("type")? {
            "call" => Some(StackFrame::Call {
                component: node.read_string("class")?.to_owned(),
                member: node.read_string("method")?.to_owned(),
                file: node.read_string("file").map(str::to_owned),
                line: node.read_long("line").and_then(|line| u32::try_from(line).ok()),
            }),
            "ignored" => Some(StackFrame::Summary {
                component: node.read_string("package")?.to_owned(),
                count: usize::try_from(node.read_long("count")?).ok()?,
            }),
            _ => None,
        }
    }
}

impl From<&CallSite> for StackFrame {
    fn from(site: &CallSite) -> Self {
        StackFrame::Call {
            component: site.component.clone(),
            member: site.member.clone(),
            file: site.file.clone(),
            line: site.line,
        }
    }
}
