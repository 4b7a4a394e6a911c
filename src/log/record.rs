use crate::log::log_level::LogLevel;

/// A single log record, ready to be written.
///
/// The message has already been formatted; what remains is to tag it with its
/// level and, optionally, a timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// The severity the record was emitted at.
    pub level: LogLevel,
    /// The formatted message text, without a trailing newline.
    pub message: String,
}

impl Record {
    /// Creates a new `Record`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rustylog::{LogLevel, Record};
    ///
    /// let rec = Record::new(LogLevel::Info, "Hello world");
    /// assert_eq!(rec.render(None), "[INFO] Hello world\n");
    /// ```
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    /// Assembles the output line: `[<timestamp> ][<LEVEL>] <message>\n`.
    #[must_use]
    pub fn render(&self, timestamp: Option<&str>) -> String {
        let tag = self.level.as_str();
        let ts_len = timestamp.map_or(0, |ts| ts.len() + 1);
        let mut line = String::with_capacity(ts_len + tag.len() + self.message.len() + 4);

        if let Some(ts) = timestamp {
            line.push_str(ts);
            line.push(' ');
        }
        line.push('[');
        line.push_str(tag);
        line.push_str("] ");
        line.push_str(&self.message);
        line.push('\n');
        line
    }
}
