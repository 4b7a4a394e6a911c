//! Free functions over the process-wide [`Logger`].
//!
//! Each call forwards to [`Logger::global`]; see the matching method for details.

use crate::log::{
    log_arg::LogArg, log_config::LoggerConfig, log_level::LogLevel, logger::Logger,
    timestamp::TimestampFormat,
};

use std::io::{self, Write};

/// Installs `sink` on the global logger; see [`Logger::set_sink`].
pub fn set_sink<W: Write + Send + 'static>(sink: W) {
    Logger::global().set_sink(sink);
}

/// Sets the global minimum level; see [`Logger::set_threshold`].
pub fn set_threshold(level: LogLevel) {
    Logger::global().set_threshold(level);
}

/// The global minimum level; see [`Logger::threshold`].
#[must_use]
pub fn threshold() -> LogLevel {
    Logger::global().threshold()
}

/// Whether the global logger would write a record at `level`; see [`Logger::enabled`].
#[must_use]
pub fn enabled(level: LogLevel) -> bool {
    Logger::global().enabled(level)
}

/// Turns the global timestamp prefix on or off; see [`Logger::enable_timestamp`].
pub fn enable_timestamp(enabled: bool) {
    Logger::global().enable_timestamp(enabled);
}

/// See [`Logger::is_timestamp_enabled`].
#[must_use]
pub fn is_timestamp_enabled() -> bool {
    Logger::global().is_timestamp_enabled()
}

/// See [`Logger::set_timestamp_format`].
pub fn set_timestamp_format(format: TimestampFormat) {
    Logger::global().set_timestamp_format(format);
}

/// See [`Logger::timestamp_format`].
#[must_use]
pub fn timestamp_format() -> TimestampFormat {
    Logger::global().timestamp_format()
}

/// Puts the global logger back to stderr, `Info`, timestamps on.
pub fn reset() {
    Logger::global().reset();
}

/// Applies `config` to the global logger; see [`Logger::apply_config`].
pub fn apply_config(config: &LoggerConfig) -> io::Result<()> {
    Logger::global().apply_config(config)
}

/// Writes one record at `level` through the global logger; see [`Logger::log`].
pub fn log(level: LogLevel, template: &str, args: &[LogArg]) -> io::Result<()> {
    Logger::global().log(level, template, args)
}

/// [`log()`] at [`LogLevel::Trace`]; see [`Logger::trace`].
pub fn trace(template: &str, args: &[LogArg]) -> io::Result<()> {
    Logger::global().trace(template, args)
}

/// [`log()`] at [`LogLevel::Debug`]; see [`Logger::debug`].
pub fn debug(template: &str, args: &[LogArg]) -> io::Result<()> {
    Logger::global().debug(template, args)
}

/// [`log()`] at [`LogLevel::Info`]; see [`Logger::info`].
pub fn info(template: &str, args: &[LogArg]) -> io::Result<()> {
    Logger::global().info(template, args)
}

/// [`log()`] at [`LogLevel::Warn`]; see [`Logger::warn`].
pub fn warn(template: &str, args: &[LogArg]) -> io::Result<()> {
    Logger::global().warn(template, args)
}

/// [`log()`] at [`LogLevel::Error`]; see [`Logger::error`].
pub fn error(template: &str, args: &[LogArg]) -> io::Result<()> {
    Logger::global().error(template, args)
}

/// [`log()`] at [`LogLevel::Fatal`]; see [`Logger::fatal`].
pub fn fatal(template: &str, args: &[LogArg]) -> io::Result<()> {
    Logger::global().fatal(template, args)
}
