//! rustylog is a small process-wide logging facility.
//!
//! It writes leveled, optionally timestamped lines such as
//!
//! ```text
//! 2025-11-02 02:30:45 [INFO] Hello world
//! ```
//!
//! to a single configurable sink, and is safe to call from any number of threads.
//!
//! - [`log::logger::Logger`]: the logger itself; one mutex guards its sink and settings.
//! - [`log::global`]: free functions over the process-wide `Logger`, re-exported here.
//! - The `log_*!` / `logger_*!` macros, gated per level by cargo features.
//! - [`config`]: INI-style files feeding [`LoggerConfig`].

/// Handles configuration loading and management.
pub mod config;
/// Logging facility: levels, formatting, the logger and its global instance.
pub mod log;

pub use config::{Config, ConfigError};
pub use crate::log::global::{
    apply_config, debug, enable_timestamp, enabled, error, fatal, info, is_timestamp_enabled,
    log, reset, set_sink, set_threshold, set_timestamp_format, threshold, timestamp_format,
    trace, warn,
};
pub use crate::log::{
    LogArg, LogLevel, LogOutput, Logger, LoggerConfig, Record, SharedBuffer, TimestampFormat,
};
