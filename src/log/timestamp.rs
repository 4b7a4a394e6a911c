use chrono::{DateTime, Local, TimeZone};

/// How the optional timestamp prefix of a record is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimestampFormat {
    /// `YYYY-MM-DD HH:MM:SS`
    #[default]
    Seconds,
    /// `YYYY-MM-DD HH:MM:SS.mmm`
    Millis,
}

impl TimestampFormat {
    const fn pattern(self) -> &'static str {
        match self {
            Self::Seconds => "%Y-%m-%d %H:%M:%S",
            Self::Millis => "%Y-%m-%d %H:%M:%S%.3f",
        }
    }

    /// Renders the current local wall-clock time.
    #[must_use]
    pub fn now(self) -> String {
        self.render(&Local::now())
    }

    /// Renders an arbitrary instant in its own time zone.
    #[must_use]
    pub fn render<Tz: TimeZone>(self, at: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        at.format(self.pattern()).to_string()
    }
}
