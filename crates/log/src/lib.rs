//! # claw-log
//!
//! Subscriber setup for the claw binaries: an `EnvFilter` plus one stderr
//! formatting layer, configured from [`Config`].
//!
//! ```rust,no_run
//! fn main() -> Result<(), claw_log::LogError> {
//!     let _guard = claw_log::init_with(claw_log::Config::from_env())?;
//!     tracing::info!("ready");
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod builder;
mod config;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, ENV_FORMAT, ENV_LEVEL, Format};

/// Error type for logger operations
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// Filter directive did not parse
    #[error("invalid filter '{filter}': {reason}")]
    Filter {
        /// The directive as given
        filter: String,
        /// Parser message
        reason: String,
    },

    /// Output format name not recognised
    #[error("unknown log format '{0}', expected pretty, compact or json")]
    UnknownFormat(String),

    /// Global subscriber could not be installed
    #[error("failed to install subscriber: {0}")]
    Init(String),
}

/// Initialize with default configuration
pub fn init() -> Result<LoggerGuard, LogError> {
    init_with(Config::default())
}

/// Initialize with custom configuration
pub fn init_with(config: Config) -> Result<LoggerGuard, LogError> {
    LoggerBuilder::from_config(config).build()
}
