//! # claw-access
//!
//! Safe nested-value access over `serde_json::Value`.
//!
//! Resolve a dotted/bracketed path, and get the caller's default back when
//! the path is missing or the value there has a different type than the
//! default. The default's type acts as the expected shape: pass `0` to be
//! sure of a number, `[]` to be sure of an array.
//!
//! ```rust
//! use claw_access::{get, has, need, LogLevel};
//! use serde_json::json;
//!
//! let doc = json!({"a": {"b": 1, "s": "1"}, "list": [10, 20]});
//!
//! assert_eq!(get(&doc, "a.b", json!(0)), json!(1));
//! assert_eq!(get(&doc, "a.s", json!(0)), json!(0));
//! assert_eq!(get(&doc, "list[1]", json!(0)), json!(20));
//! assert_eq!(get(&doc, "missing", None), json!(""));
//! assert_eq!(need(&doc, "a.c", json!(false), LogLevel::Info), json!(false));
//! assert!(!has(&doc, "a.c"));
//! ```
//!
//! Fallbacks are reported through a [`DiagnosticSink`]: either the
//! process-wide one registered with [`set_logger`], or one injected through
//! [`AccessorConfig`].

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]

mod accessor;
mod error;
mod event;
mod kind;
mod path;
mod sink;
mod walk;

pub use accessor::{Accessor, AccessorConfig, EMPTY_MARKER, empty_marker};
pub use error::{ParseLevelError, SinkError};
pub use event::{Diagnostic, EVENT_TYPES, EventType, LevelSet, LogLevel};
pub use kind::{TypeTag, is_empty, is_truthy};
pub use path::{IntoPath, Path, Segment, normalize};
pub use sink::{
    DiagnosticSink, NoopSink, RecordingSink, SinkHandle, TracingSink, logger, set_logger,
};
pub use walk::resolve;

use serde_json::Value;

/// Read `path` from `obj`, falling back to `default` (`""` when `None`).
///
/// Fallbacks go to the process-wide sink at `warn`.
pub fn get(obj: &Value, path: impl IntoPath, default: impl Into<Option<Value>>) -> Value {
    Accessor::default().get(obj, path, default)
}

/// Read `path` from `obj`, reporting fallbacks at `level` (`None` for none).
pub fn need(
    obj: &Value,
    path: impl IntoPath,
    default: impl Into<Option<Value>>,
    level: impl Into<Option<LogLevel>>,
) -> Value {
    Accessor::default().need(obj, path, default, level)
}

/// `true` when `path` resolves to a value other than `null`
pub fn has(obj: &Value, path: impl IntoPath) -> bool {
    Accessor::default().has(obj, path)
}
