//! Error types for the edges of the accessor.
//!
//! Lookups themselves never fail; these only cover level parsing and sink
//! registration.

/// A log level string that names no [`LogLevel`](crate::LogLevel)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level '{input}', expected one of: error, warn, info, debug, log")]
pub struct ParseLevelError {
    pub input: String,
}

/// Sink registration failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SinkError {
    /// The sink declared an empty level set, so it could never receive a
    /// diagnostic.
    #[error("diagnostic sink '{sink}' supports no log levels")]
    NoLevels { sink: String },
}
