//! Configuration types and presets

use crate::LogError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Environment variable holding the filter directive
pub const ENV_LEVEL: &str = "CLAW_LOG";
/// Environment variable holding the output format
pub const ENV_FORMAT: &str = "CLAW_LOG_FORMAT";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Filter directive (e.g., "warn", "claw_access=debug,info")
    pub level: String,

    /// Output format
    pub format: Format,

    /// Display configuration
    pub display: DisplayConfig,

    /// Service name recorded on a root span around everything logged
    pub service: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: Format::Compact,
            display: DisplayConfig::default(),
            service: None,
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Human-readable, multi-line
    Pretty,
    /// Compact single-line output
    Compact,
    /// One JSON object per event
    Json,
}

impl FromStr for Format {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(LogError::UnknownFormat(other.to_string())),
        }
    }
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show timestamps
    pub time: bool,
    /// Show source location (file:line)
    pub source: bool,
    /// Show target module
    pub target: bool,
    /// Use ANSI colors
    pub colors: bool,
    /// Flatten JSON events
    pub flatten: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time: true,
            source: false,
            target: true,
            colors: false,
            flatten: false,
        }
    }
}

impl Config {
    /// Create configuration from environment variables
    ///
    /// `CLAW_LOG` (falling back to `RUST_LOG`) sets the filter,
    /// `CLAW_LOG_FORMAT` the format. Unknown formats fall back to compact.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `lookup`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup(ENV_LEVEL).or_else(|| lookup("RUST_LOG")) {
            config.level = level;
        }

        if let Some(format) = lookup(ENV_FORMAT) {
            config.format = format.parse().unwrap_or(Format::Compact);
        }

        config
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            display: DisplayConfig {
                colors: true,
                source: true,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            display: DisplayConfig {
                colors: false,
                source: false,
                flatten: true,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Replace the filter directive
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Replace the output format
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Record `service` on the root span
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_defaults() {
        assert_eq!(Config::from_lookup(lookup(&[])), Config::default());
    }

    #[test]
    fn test_claw_log_wins_over_rust_log() {
        let config = Config::from_lookup(lookup(&[("CLAW_LOG", "debug"), ("RUST_LOG", "trace")]));
        assert_eq!(config.level, "debug");

        let config = Config::from_lookup(lookup(&[("RUST_LOG", "trace")]));
        assert_eq!(config.level, "trace");
    }

    #[test]
    fn test_format_from_env() {
        let config = Config::from_lookup(lookup(&[("CLAW_LOG_FORMAT", "JSON")]));
        assert_eq!(config.format, Format::Json);

        let config = Config::from_lookup(lookup(&[("CLAW_LOG_FORMAT", "fancy")]));
        assert_eq!(config.format, Format::Compact);
    }

    #[test]
    fn test_format_parse_error() {
        let err = "xml".parse::<Format>().unwrap_err();
        assert!(matches!(err, LogError::UnknownFormat(ref f) if f == "xml"));
    }

    #[test]
    fn test_presets() {
        assert_eq!(Config::development().format, Format::Pretty);
        assert!(Config::development().display.source);
        assert_eq!(Config::production().format, Format::Json);
        assert!(Config::production().display.flatten);
    }
}
