use crate::log::{
    format::format_message, log_arg::LogArg, log_config::LoggerConfig, log_level::LogLevel,
    record::Record, timestamp::TimestampFormat,
};

use std::{
    fmt,
    io::{self, Write},
    sync::{LazyLock, Mutex, MutexGuard, PoisonError},
};

static GLOBAL: LazyLock<Logger> = LazyLock::new(Logger::new);

/// Everything a `Logger` can be configured with. Only ever touched under the lock.
struct LoggerState {
    sink: Box<dyn Write + Send>,
    threshold: LogLevel,
    timestamp_enabled: bool,
    timestamp_format: TimestampFormat,
}

impl Default for LoggerState {
    fn default() -> Self {
        Self {
            sink: Box::new(io::stderr()),
            threshold: LogLevel::Info,
            timestamp_enabled: true,
            timestamp_format: TimestampFormat::Seconds,
        }
    }
}

/// Leveled, thread-safe logger writing one line per record to a single sink.
///
/// One mutex guards the sink, the threshold and the timestamp settings. It is
/// held for:
/// 1. **Configuration**: every getter and setter.
/// 2. **Filtering**: the threshold check at the start of [`log`](Self::log).
/// 3. **Writing**: timestamp read, `write_all` of the whole record, and `flush`.
///
/// Message formatting happens between 2 and 3, outside the lock, so threads only
/// contend for the actual write. Each record therefore lands in the sink as one
/// contiguous line, and a reconfiguration is seen by an in-flight record either
/// entirely or not at all.
///
/// Most code uses the process-wide instance through [`Logger::global`] or the
/// free functions in [`crate::log::global`]; separate instances are handy for
/// tests and for embedding.
pub struct Logger {
    state: Mutex<LoggerState>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("Logger")
            .field("threshold", &state.threshold)
            .field("timestamp_enabled", &state.timestamp_enabled)
            .field("timestamp_format", &state.timestamp_format)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// A logger with the defaults: stderr, `Info`, timestamps on.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(LoggerState::default()),
        }
    }

    /// A logger with the defaults but writing to `sink`.
    #[must_use]
    pub fn with_sink<W: Write + Send + 'static>(sink: W) -> Self {
        let logger = Self::new();
        logger.set_sink(sink);
        logger
    }

    /// The process-wide logger, created with defaults on first use.
    #[must_use]
    pub fn global() -> &'static Logger {
        &GLOBAL
    }

    // A sink that panicked mid-write leaves the state itself intact, so a
    // poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, LoggerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the sink. Records emitted after this call go to `sink`.
    ///
    /// Keep a clone (e.g. a [`SharedBuffer`](crate::SharedBuffer) or a
    /// `File::try_clone`) if you need to read the output back.
    pub fn set_sink<W: Write + Send + 'static>(&self, sink: W) {
        self.lock().sink = Box::new(sink);
    }

    pub fn set_threshold(&self, level: LogLevel) {
        self.lock().threshold = level;
    }

    #[must_use]
    pub fn threshold(&self) -> LogLevel {
        self.lock().threshold
    }

    /// Whether a record at `level` would currently be written.
    #[must_use]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.lock().threshold
    }

    pub fn enable_timestamp(&self, enabled: bool) {
        self.lock().timestamp_enabled = enabled;
    }

    #[must_use]
    pub fn is_timestamp_enabled(&self) -> bool {
        self.lock().timestamp_enabled
    }

    pub fn set_timestamp_format(&self, format: TimestampFormat) {
        self.lock().timestamp_format = format;
    }

    #[must_use]
    pub fn timestamp_format(&self) -> TimestampFormat {
        self.lock().timestamp_format
    }

    /// Restores every setting to its default in one step.
    pub fn reset(&self) {
        *self.lock() = LoggerState::default();
    }

    /// Applies a whole [`LoggerConfig`] at once.
    ///
    /// The output is opened before the lock is taken; then the sink, threshold
    /// and timestamp settings are swapped together.
    ///
    /// # Errors
    ///
    /// Returns the I/O error from opening the configured output. The current
    /// configuration is left untouched in that case.
    pub fn apply_config(&self, config: &LoggerConfig) -> io::Result<()> {
        let sink = config.output.open()?;
        let mut state = self.lock();
        state.sink = sink;
        state.threshold = config.threshold;
        state.timestamp_enabled = config.timestamp_enabled;
        state.timestamp_format = config.timestamp_format;
        Ok(())
    }

    /// Formats and writes one record at `level`.
    ///
    /// Records below the threshold are discarded before any formatting. See
    /// [`format_message`] for how `{}` placeholders are filled from `args`.
    ///
    /// # Errors
    ///
    /// Returns whatever error the sink reports from `write_all` or `flush`.
    /// Nothing is retried.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rustylog::{LogLevel, Logger, SharedBuffer};
    ///
    /// let out = SharedBuffer::new();
    /// let logger = Logger::with_sink(out.clone());
    /// logger.enable_timestamp(false);
    /// logger.log(LogLevel::Info, "Hello {}", &["world".into()]).unwrap();
    /// assert_eq!(out.contents(), "[INFO] Hello world\n");
    /// ```
    pub fn log(&self, level: LogLevel, template: &str, args: &[LogArg]) -> io::Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }

        let record = Record::new(level, format_message(template, args));
        self.write_record(&record)
    }

    // Timestamp, write and flush all happen under one lock acquisition.
    fn write_record(&self, record: &Record) -> io::Result<()> {
        let mut state = self.lock();
        let timestamp = state
            .timestamp_enabled
            .then(|| state.timestamp_format.now());
        let line = record.render(timestamp.as_deref());
        state.sink.write_all(line.as_bytes())?;
        state.sink.flush()
    }

    /// [`log`](Self::log) at [`LogLevel::Trace`].
    pub fn trace(&self, template: &str, args: &[LogArg]) -> io::Result<()> {
        self.log(LogLevel::Trace, template, args)
    }

    /// [`log`](Self::log) at [`LogLevel::Debug`].
    pub fn debug(&self, template: &str, args: &[LogArg]) -> io::Result<()> {
        self.log(LogLevel::Debug, template, args)
    }

    /// [`log`](Self::log) at [`LogLevel::Info`].
    pub fn info(&self, template: &str, args: &[LogArg]) -> io::Result<()> {
        self.log(LogLevel::Info, template, args)
    }

    /// [`log`](Self::log) at [`LogLevel::Warn`].
    pub fn warn(&self, template: &str, args: &[LogArg]) -> io::Result<()> {
        self.log(LogLevel::Warn, template, args)
    }

    /// [`log`](Self::log) at [`LogLevel::Error`].
    pub fn error(&self, template: &str, args: &[LogArg]) -> io::Result<()> {
        self.log(LogLevel::Error, template, args)
    }

    /// [`log`](Self::log) at [`LogLevel::Fatal`].
    pub fn fatal(&self, template: &str, args: &[LogArg]) -> io::Result<()> {
        self.log(LogLevel::Fatal, template, args)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::log::{log_config::LogOutput, shared_buffer::SharedBuffer};

    fn quiet_logger() -> (Logger, SharedBuffer) {
        let out = SharedBuffer::new();
        let logger = Logger::with_sink(out.clone());
        logger.enable_timestamp(false);
        logger.set_threshold(LogLevel::Trace);
        (logger, out)
    }

    /// Sink that rejects every write.
    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn defaults() {
        let logger = Logger::new();
        assert_eq!(logger.threshold(), LogLevel::Info);
        assert!(logger.is_timestamp_enabled());
        assert_eq!(logger.timestamp_format(), TimestampFormat::Seconds);
    }

    #[test]
    fn info_hello_world() {
        let (logger, out) = quiet_logger();
        logger.info("Hello {}", &["world".into()]).unwrap();

        let text = out.contents();
        assert!(text.contains("[INFO] Hello world"), "got: {text}");
        assert!(text.starts_with('['));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn threshold_filters_lower_levels() {
        for &threshold in &LogLevel::ALL {
            let (logger, out) = quiet_logger();
            logger.set_threshold(threshold);

            for &level in &LogLevel::ALL {
                logger.log(level, "msg", &[]).unwrap();
            }

            let tags: Vec<String> = out
                .lines()
                .iter()
                .map(|l| l.trim_end_matches(" msg").to_string())
                .collect();
            let expected: Vec<String> = LogLevel::ALL
                .iter()
                .filter(|&&l| l >= threshold)
                .map(|l| format!("[{l}]"))
                .collect();
            assert_eq!(tags, expected, "threshold {threshold}");
        }
    }

    #[test]
    fn warn_threshold_drops_info_keeps_error() {
        let (logger, out) = quiet_logger();
        logger.set_threshold(LogLevel::Warn);

        logger.info("Ignored message", &[]).unwrap();
        logger.error("An error {}", &[42.into()]).unwrap();

        let text = out.contents();
        assert!(!text.contains("Ignored message"));
        assert!(text.contains("[ERROR] An error 42"));
    }

    #[test]
    fn below_threshold_never_touches_sink() {
        let logger = Logger::with_sink(BrokenSink);
        logger.set_threshold(LogLevel::Error);
        assert!(logger.warn("dropped", &[]).is_ok());
    }

    #[test]
    fn sink_errors_are_returned() {
        let logger = Logger::with_sink(BrokenSink);
        let err = logger.error("boom", &[]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn timestamp_prefix_toggles() {
        let (logger, out) = quiet_logger();
        logger.enable_timestamp(true);
        logger.debug("Coordinates {} {}", &[10.into(), 20.into()]).unwrap();

        let line = out.contents();
        assert!(line.chars().next().unwrap().is_ascii_digit(), "got: {line}");
        assert!(line.contains("[DEBUG] Coordinates 10 20"));
        // "YYYY-MM-DD HH:MM:SS " precedes the tag.
        assert_eq!(line.find('['), Some(20));

        out.clear();
        logger.enable_timestamp(false);
        logger.debug("again", &[]).unwrap();
        assert_eq!(out.contents(), "[DEBUG] again\n");
    }

    #[test]
    fn millis_timestamp() {
        let (logger, out) = quiet_logger();
        logger.enable_timestamp(true);
        logger.set_timestamp_format(TimestampFormat::Millis);
        logger.info("x", &[]).unwrap();

        let line = out.contents();
        assert_eq!(line.find('['), Some(24), "got: {line}");
        assert_eq!(line.as_bytes()[19], b'.');
    }

    #[test]
    fn set_sink_redirects_following_records() {
        let (logger, first) = quiet_logger();
        let second = SharedBuffer::new();

        logger.info("one", &[]).unwrap();
        logger.set_sink(second.clone());
        logger.info("two", &[]).unwrap();

        assert_eq!(first.contents(), "[INFO] one\n");
        assert_eq!(second.contents(), "[INFO] two\n");
    }

    #[test]
    fn every_level_helper_tags_correctly() {
        let (logger, out) = quiet_logger();
        logger.trace("t", &[]).unwrap();
        logger.debug("d", &[]).unwrap();
        logger.info("i", &[]).unwrap();
        logger.warn("w", &[]).unwrap();
        logger.error("e", &[]).unwrap();
        logger.fatal("f", &[]).unwrap();

        assert_eq!(
            out.lines(),
            ["[TRACE] t", "[DEBUG] d", "[INFO] i", "[WARN] w", "[ERROR] e", "[FATAL] f"]
        );
    }

    #[test]
    fn reset_restores_defaults() {
        let (logger, _out) = quiet_logger();
        logger.set_timestamp_format(TimestampFormat::Millis);
        logger.reset();

        assert_eq!(logger.threshold(), LogLevel::Info);
        assert!(logger.is_timestamp_enabled());
        assert_eq!(logger.timestamp_format(), TimestampFormat::Seconds);
    }

    #[test]
    fn apply_config_swaps_everything() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let (logger, old) = quiet_logger();

        let config = LoggerConfig {
            threshold: LogLevel::Warn,
            output: LogOutput::File(path.clone()),
            timestamp_enabled: false,
            timestamp_format: TimestampFormat::Millis,
        };
        logger.apply_config(&config).unwrap();

        logger.info("filtered", &[]).unwrap();
        logger.warn("kept {}", &[1.into()]).unwrap();

        assert!(old.is_empty());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[WARN] kept 1\n");
        assert_eq!(logger.timestamp_format(), TimestampFormat::Millis);
    }

    #[test]
    fn apply_config_failure_keeps_previous_state() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for appending.
        let config = LoggerConfig {
            threshold: LogLevel::Fatal,
            output: LogOutput::File(dir.path().to_path_buf()),
            ..LoggerConfig::new()
        };
        let (logger, out) = quiet_logger();

        assert!(logger.apply_config(&config).is_err());
        assert_eq!(logger.threshold(), LogLevel::Trace);
        logger.trace("still here", &[]).unwrap();
        assert_eq!(out.contents(), "[TRACE] still here\n");
    }

    /// Sink that panics partway through a write, poisoning the lock.
    struct PanickingSink;

    impl Write for PanickingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            panic!("sink blew up");
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn recovers_after_sink_panics_mid_write() {
        let logger = Logger::with_sink(PanickingSink);
        logger.enable_timestamp(false);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _ = logger.info("first", &[]);
        }));
        assert!(result.is_err(), "the sink should have panicked");
        assert!(logger.state.is_poisoned());

        let out = SharedBuffer::new();
        logger.set_sink(out.clone());
        logger.info("after {}", &["recovery".into()]).unwrap();

        assert_eq!(out.contents(), "[INFO] after recovery\n");
        assert_eq!(logger.threshold(), LogLevel::Info);
        assert!(!logger.is_timestamp_enabled());
    }

    #[test]
    fn write_record_bypasses_threshold() {
        let (logger, out) = quiet_logger();
        logger.set_threshold(LogLevel::Fatal);
        logger
            .write_record(&Record::new(LogLevel::Debug, "forced"))
            .unwrap();
        assert_eq!(out.contents(), "[DEBUG] forced\n");
    }
}
