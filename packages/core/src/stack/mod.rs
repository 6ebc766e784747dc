//! Stack frames, ignorable prefixes and the compaction pass.

pub mod backtrace;
pub mod compactor;
pub mod frame;
pub mod ignorable;

pub use backtrace::{call_sites, parse_backtrace};
pub use compactor::{StackCompactor, StackEvent, compact, filter_stack_trace, walk_stack};
pub use frame::{CallSite, StackFrame, UNKNOWN_LINE};
pub use ignorable::{BUILTIN_IGNORABLE_PREFIXES, IgnorableSet};
