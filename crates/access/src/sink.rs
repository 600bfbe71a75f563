//! Diagnostic sinks
//!
//! A sink receives one [`Diagnostic`] per fallback. Each sink declares the
//! [`LevelSet`] it can take; the set is captured once, when the sink is
//! wrapped in a [`SinkHandle`], and diagnostics at other levels are dropped
//! without reaching the sink.
//!
//! The process-wide handle behind [`set_logger`] lives in an `ArcSwap`:
//! reads are lock-free and a replacement is a single atomic store (last
//! writer wins). There is no teardown.
//!
//! ```rust
//! use claw_access::{RecordingSink, set_logger};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(RecordingSink::new());
//! set_logger(Arc::clone(&sink)).unwrap();
//! ```

use crate::error::SinkError;
use crate::event::{Diagnostic, LevelSet, LogLevel};
use arc_swap::ArcSwap;
use parking_lot::Mutex;
use std::fmt;
use std::sync::{Arc, LazyLock};

/// Receiver for fallback diagnostics
pub trait DiagnosticSink: Send + Sync {
    /// Called once per fallback, at a level contained in [`levels`](Self::levels).
    /// Should be fast and non-blocking.
    fn record(&self, diagnostic: &Diagnostic);

    /// Levels this sink accepts. Defaults to every level.
    fn levels(&self) -> LevelSet {
        LevelSet::all()
    }

    /// Name used in registration errors
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// A sink together with the level set it declared at registration
#[derive(Clone)]
pub struct SinkHandle {
    sink: Arc<dyn DiagnosticSink>,
    levels: LevelSet,
}

impl SinkHandle {
    /// Wrap a sink, rejecting one that accepts no level at all
    pub fn new<S: DiagnosticSink + 'static>(sink: Arc<S>) -> Result<Self, SinkError> {
        Self::from_dyn(sink)
    }

    pub fn from_dyn(sink: Arc<dyn DiagnosticSink>) -> Result<Self, SinkError> {
        let levels = sink.levels();
        if levels.is_empty() {
            return Err(SinkError::NoLevels {
                sink: sink.name().to_owned(),
            });
        }
        Ok(Self { sink, levels })
    }

    /// Handle around [`NoopSink`]
    pub fn noop() -> Self {
        Self {
            sink: Arc::new(NoopSink),
            levels: LevelSet::all(),
        }
    }

    pub fn levels(&self) -> LevelSet {
        self.levels
    }

    pub fn supports(&self, level: LogLevel) -> bool {
        self.levels.accepts(level)
    }

    /// Forward a diagnostic if its level was declared; skip it otherwise
    pub fn emit(&self, diagnostic: &Diagnostic) {
        if self.supports(diagnostic.log_level) {
            self.sink.record(diagnostic);
        }
    }
}

impl fmt::Debug for SinkHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkHandle")
            .field("sink", &self.sink.name())
            .field("levels", &self.levels)
            .finish()
    }
}

/// Sink that drops everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn record(&self, _diagnostic: &Diagnostic) {}
}

/// Sink that turns diagnostics into `tracing` events.
///
/// [`LogLevel::Log`] is emitted at `INFO`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, diagnostic: &Diagnostic) {
        macro_rules! log_at_level {
            ($mac:ident) => {
                tracing::$mac!(
                    event = %diagnostic.event_type,
                    path = %diagnostic.path,
                    default = %diagnostic.default_value,
                    "nested value fell back to default"
                )
            };
        }

        match diagnostic.log_level {
            LogLevel::Error => log_at_level!(error),
            LogLevel::Warn => log_at_level!(warn),
            LogLevel::Info | LogLevel::Log => log_at_level!(info),
            LogLevel::Debug => log_at_level!(debug),
        }
    }

    fn name(&self) -> &str {
        "tracing"
    }
}

/// Sink that keeps every diagnostic in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<Diagnostic>>,
    levels: Option<LevelSet>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept only `levels`
    pub fn with_levels(levels: LevelSet) -> Self {
        Self {
            records: Mutex::default(),
            levels: Some(levels),
        }
    }

    /// Copy of everything recorded so far
    pub fn records(&self) -> Vec<Diagnostic> {
        self.records.lock().clone()
    }

    /// Drain the buffer
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.records.lock())
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl DiagnosticSink for RecordingSink {
    fn record(&self, diagnostic: &Diagnostic) {
        self.records.lock().push(diagnostic.clone());
    }

    fn levels(&self) -> LevelSet {
        self.levels.unwrap_or_else(LevelSet::all)
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// Process-wide sink used by the free functions and default accessors
static LOGGER: LazyLock<ArcSwap<Option<SinkHandle>>> =
    LazyLock::new(|| ArcSwap::from_pointee(None));

/// Register the process-wide sink, replacing any previous one
pub fn set_logger<S: DiagnosticSink + 'static>(sink: Arc<S>) -> Result<(), SinkError> {
    let handle = SinkHandle::new(sink)?;
    tracing::debug!(sink = ?handle, "diagnostic sink registered");
    LOGGER.store(Arc::new(Some(handle)));
    Ok(())
}

/// The process-wide sink, if one was registered
#[inline]
pub fn logger() -> Option<SinkHandle> {
    let guard = LOGGER.load();
    (**guard).clone()
}
