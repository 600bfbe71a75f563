//! The accessor: `get`, `need` and `has` over a JSON document
//!
//! A lookup never fails. When the path does not resolve, or resolves to a
//! value whose [`TypeTag`] differs from the default's, the default comes
//! back instead and a [`Diagnostic`] goes to the configured sink.
//!
//! ```rust
//! use claw_access::Accessor;
//! use serde_json::json;
//!
//! let doc = json!({"a": {"b": 1}, "list": [10, 20]});
//! let access = Accessor::default();
//!
//! assert_eq!(access.get(&doc, "a.b", json!(0)), json!(1));
//! assert_eq!(access.get(&doc, "a.c", json!(0)), json!(0));
//! assert_eq!(access.get(&doc, "list[1]", json!(0)), json!(20));
//! assert_eq!(access.get(&doc, "a", json!([])), json!([]));
//! assert!(access.has(&doc, "list"));
//! ```

use crate::error::SinkError;
use crate::event::{Diagnostic, EventType, LogLevel};
use crate::kind::{TypeTag, is_empty};
use crate::path::{IntoPath, Path, normalize};
use crate::sink::{DiagnosticSink, SinkHandle, logger};
use crate::walk::resolve;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Key carried by the sentinel that replaces an empty-object default
pub const EMPTY_MARKER: &str = "__isEmpty";

/// Where an accessor sends its diagnostics
#[derive(Debug, Clone, Default)]
enum SinkSource {
    /// Whatever [`set_logger`](crate::set_logger) registered, read per call
    #[default]
    Global,
    Fixed(SinkHandle),
}

/// Accessor settings
#[derive(Debug, Clone, Default)]
pub struct AccessorConfig {
    sink: SinkSource,
    default_level: LogLevel,
}

impl AccessorConfig {
    /// Global sink, `warn` level for [`Accessor::get`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Send diagnostics to `sink` instead of the process-wide one
    pub fn with_sink<S: DiagnosticSink + 'static>(mut self, sink: Arc<S>) -> Result<Self, SinkError> {
        self.sink = SinkSource::Fixed(SinkHandle::new(sink)?);
        Ok(self)
    }

    pub fn with_sink_handle(mut self, handle: SinkHandle) -> Self {
        self.sink = SinkSource::Fixed(handle);
        self
    }

    /// Never report anything
    pub fn silent(self) -> Self {
        self.with_sink_handle(SinkHandle::noop())
    }

    /// Level used by [`Accessor::get`]
    pub fn with_default_level(mut self, level: LogLevel) -> Self {
        self.default_level = level;
        self
    }

    pub fn default_level(&self) -> LogLevel {
        self.default_level
    }

    pub fn uses_global_sink(&self) -> bool {
        matches!(self.sink, SinkSource::Global)
    }

    fn sink(&self) -> Option<SinkHandle> {
        match &self.sink {
            SinkSource::Global => logger(),
            SinkSource::Fixed(handle) => Some(handle.clone()),
        }
    }
}

/// Safe nested-value reader
#[derive(Debug, Clone, Default)]
pub struct Accessor {
    config: AccessorConfig,
}

impl Accessor {
    pub fn new(config: AccessorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AccessorConfig {
        &self.config
    }

    /// Read `path`, falling back to `default` (the empty string when `None`).
    ///
    /// Fallbacks are reported at the configured default level.
    pub fn get(&self, obj: &Value, path: impl IntoPath, default: impl Into<Option<Value>>) -> Value {
        self.access(obj, path, default.into(), Some(self.config.default_level))
    }

    /// Like [`get`](Self::get), reporting fallbacks at `level`; `None`
    /// keeps this call quiet.
    pub fn need(
        &self,
        obj: &Value,
        path: impl IntoPath,
        default: impl Into<Option<Value>>,
        level: impl Into<Option<LogLevel>>,
    ) -> Value {
        self.access(obj, path, default.into(), level.into())
    }

    /// `true` when `path` resolves to something other than `null`
    pub fn has(&self, obj: &Value, path: impl IntoPath) -> bool {
        let path = normalize(path);
        !TypeTag::of(resolve(obj, &path).as_deref()).is_nullish()
    }

    /// Resolve, compare type tags against the default, report, return.
    pub fn access(
        &self,
        obj: &Value,
        path: impl IntoPath,
        default: Option<Value>,
        level: Option<LogLevel>,
    ) -> Value {
        let path = normalize(path);
        let resolved = resolve(obj, &path);
        let default = substitute_default(default);

        let Some(value) = resolved else {
            self.report(EventType::DataMissing, path, &default, level);
            return default;
        };
        if TypeTag::from(&*value) != TypeTag::from(&default) {
            self.report(EventType::TypeMismatch, path, &default, level);
            return default;
        }
        value.into_owned()
    }

    fn report(&self, event_type: EventType, path: Path, default: &Value, level: Option<LogLevel>) {
        let Some(log_level) = level else {
            return;
        };
        let Some(sink) = self.config.sink() else {
            return;
        };
        sink.emit(&Diagnostic {
            event_type,
            path,
            default_value: default.clone(),
            log_level,
        });
    }
}

/// Omitted defaults become `""`; empty objects become the
/// `{"__isEmpty": true}` sentinel.
fn substitute_default(default: Option<Value>) -> Value {
    match default {
        None => Value::String(String::new()),
        Some(value) if TypeTag::from(&value) == TypeTag::Object && is_empty(&value) == Some(true) => {
            empty_marker()
        }
        Some(value) => value,
    }
}

/// `{"__isEmpty": true}`
pub fn empty_marker() -> Value {
    let mut map = Map::new();
    map.insert(EMPTY_MARKER.to_owned(), Value::Bool(true));
    Value::Object(map)
}
