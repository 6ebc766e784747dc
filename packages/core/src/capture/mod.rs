//! Capturing error chains into documents
//!
//! A [`CaptureSource`] exposes one level of a live error chain. [`ErrorCapture`]
//! walks the chain from the outermost level inward, compacts each level's stack
//! and nests the levels through their `cause` field:
//!
//! ```
//! use keel_json_core::capture::{ErrorCapture, RaisedError};
//! use keel_json_core::stack::CallSite;
//!
//! let raised = RaisedError::new("QueryFailed")
//!     .with_message("select failed")
//!     .with_call_sites(vec![CallSite::new("app::db", "query").at("src/db.rs", 42)])
//!     .with_cause(RaisedError::new("Timeout").with_message("deadline exceeded"));
//!
//! let captured = ErrorCapture::default().capture(&raised);
//! assert_eq!(captured.class_name(), "QueryFailed");
//! assert_eq!(captured.chain_len(), 2);
//! ```

mod captured;
mod engine;
mod source;

pub use captured::{CapturedError, CapturedLevel};
pub use engine::{ErrorCapture, capture};
pub use source::{ANYHOW_ERROR_CLASS, CaptureSource, DYN_ERROR_CLASS, RaisedError};
