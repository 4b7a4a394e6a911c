use crate::{
    config::{Config, ConfigError},
    log::{log_level::LogLevel, timestamp::TimestampFormat},
};

use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

/// Section of a [`Config`] file read by [`LoggerConfig::from_config`].
pub const SECTION: &str = "Logging";

/// Where records go.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LogOutput {
    #[default]
    Stderr,
    Stdout,
    /// Appended to; created (with its parent directories) if missing.
    File(PathBuf),
}

impl LogOutput {
    /// `stderr`, `stdout`, or anything else as a file path (`~` expanded).
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        match raw.to_ascii_lowercase().as_str() {
            "" => Err(ConfigError::EmptyOutput),
            "stderr" => Ok(Self::Stderr),
            "stdout" => Ok(Self::Stdout),
            _ => Ok(Self::File(expand_path(raw))),
        }
    }

    /// Opens the destination as a boxed writer ready to install as a sink.
    pub fn open(&self) -> io::Result<Box<dyn Write + Send>> {
        match self {
            Self::Stderr => Ok(Box::new(io::stderr())),
            Self::Stdout => Ok(Box::new(io::stdout())),
            Self::File(path) => {
                if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                    fs::create_dir_all(dir)?;
                }
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                Ok(Box::new(file))
            }
        }
    }
}

/// Declarative logger settings; every field mirrors one piece of logger state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub threshold: LogLevel,
    pub output: LogOutput,
    pub timestamp_enabled: bool,
    pub timestamp_format: TimestampFormat,
}

/// The defaults a fresh logger starts with: stderr, `Info`, timestamps on.
impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            threshold: LogLevel::Info,
            output: LogOutput::Stderr,
            timestamp_enabled: true,
            timestamp_format: TimestampFormat::Seconds,
        }
    }
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the `[Logging]` section. Keys left out keep the values of [`LoggerConfig::new`].
    ///
    /// Recognized keys: `level`, `timestamp`, `timestamp_millis`, `output`.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let mut out = Self::new();

        if let Some(level) = config.lookup(SECTION, "level") {
            out.threshold = level
                .parse()
                .map_err(|_| ConfigError::InvalidLevel(level.to_string()))?;
        }
        if let Some(enabled) = config.get_bool(SECTION, "timestamp")? {
            out.timestamp_enabled = enabled;
        }
        if let Some(millis) = config.get_bool(SECTION, "timestamp_millis")? {
            out.timestamp_format = if millis {
                TimestampFormat::Millis
            } else {
                TimestampFormat::Seconds
            };
        }
        if let Some(output) = config.lookup(SECTION, "output") {
            out.output = LogOutput::parse(output)?;
        }

        Ok(out)
    }

    /// Loads a config file and reads its `[Logging]` section.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Config::load(path.as_ref())?;
        Self::from_config(&config)
    }
}

/// Expands tilde (`~`) in file paths to the user's home directory.
fn expand_path(path_str: &str) -> PathBuf {
    if path_str.starts_with('~') {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .ok()
            .map(PathBuf::from);

        if let Some(mut home_path) = home {
            if path_str == "~" {
                return home_path;
            }
            if let Some(rest) = path_str
                .strip_prefix("~/")
                .or_else(|| path_str.strip_prefix("~\\"))
            {
                home_path.push(rest);
                return home_path;
            }
        }
    }
    PathBuf::from(path_str)
}
