//! Fallback events, log levels and the diagnostic record

use crate::error::ParseLevelError;
use crate::path::Path;
use bitflags::bitflags;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Why an accessor call fell back to its default
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EventType {
    /// The path did not resolve to a value
    DataMissing,
    /// The path resolved, but to a different type than the default
    TypeMismatch,
}

/// Every event type, for introspection
pub const EVENT_TYPES: [EventType; 2] = [EventType::DataMissing, EventType::TypeMismatch];

impl EventType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DataMissing => "dataMissing",
            Self::TypeMismatch => "typeMismatch",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Level a diagnostic is reported at
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    /// Plain, unlevelled log line
    Log,
}

impl LogLevel {
    pub const ALL: [Self; 5] = [Self::Error, Self::Warn, Self::Info, Self::Debug, Self::Log];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Log => "log",
        }
    }

    /// The single-level set for `self`
    pub const fn flag(self) -> LevelSet {
        match self {
            Self::Error => LevelSet::ERROR,
            Self::Warn => LevelSet::WARN,
            Self::Info => LevelSet::INFO,
            Self::Debug => LevelSet::DEBUG,
            Self::Log => LevelSet::LOG,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "log" => Ok(Self::Log),
            _ => Err(ParseLevelError {
                input: s.to_owned(),
            }),
        }
    }
}

bitflags! {
    /// Set of levels a sink can receive
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LevelSet: u8 {
        const ERROR = 0b0000_0001;
        const WARN = 0b0000_0010;
        const INFO = 0b0000_0100;
        const DEBUG = 0b0000_1000;
        const LOG = 0b0001_0000;
    }
}

impl LevelSet {
    /// Whether `level` is in the set
    pub const fn accepts(self, level: LogLevel) -> bool {
        self.contains(level.flag())
    }

    /// Levels in the set, most severe first
    pub fn levels(self) -> impl Iterator<Item = LogLevel> {
        LogLevel::ALL.into_iter().filter(move |level| self.accepts(*level))
    }
}

impl From<LogLevel> for LevelSet {
    fn from(level: LogLevel) -> Self {
        level.flag()
    }
}

impl FromIterator<LogLevel> for LevelSet {
    fn from_iter<I: IntoIterator<Item = LogLevel>>(iter: I) -> Self {
        iter.into_iter().map(Self::from).collect()
    }
}

/// One fallback, as handed to a diagnostic sink
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub event_type: EventType,
    pub path: Path,
    /// The default that was returned, after substitution
    pub default_value: Value,
    pub log_level: LogLevel,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "event: {}, path: {}, default: {}",
            self.event_type, self.path, self.default_value
        )
    }
}
