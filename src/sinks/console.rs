//! Console sink implementation

use crate::core::{Level, Record, Result, Sink, DEFAULT_TIME_FORMAT};
use parking_lot::RwLock;
use std::io::Write;

/// Writes records to standard output, with ANSI colors keyed by level when
/// enabled.
pub struct ConsoleSink {
    name: String,
    level: RwLock<Level>,
    time_format: RwLock<String>,
    use_colors: bool,
    detail: bool,
}

impl ConsoleSink {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: RwLock::new(Level::Debug),
            time_format: RwLock::new(DEFAULT_TIME_FORMAT.to_string()),
            use_colors: true,
            detail: true,
        }
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Include or omit the pid/file:line/module segment in each line.
    #[must_use]
    pub fn with_detail(mut self, detail: bool) -> Self {
        self.detail = detail;
        self
    }

    #[must_use]
    pub fn with_level(self, level: Level) -> Self {
        *self.level.write() = level;
        self
    }

    /// Set a strftime-compatible timestamp pattern.
    #[must_use]
    pub fn with_time_format(self, format: &str) -> Self {
        *self.time_format.write() = format.to_string();
        self
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new("console")
    }
}

impl Sink for ConsoleSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn level(&self) -> Level {
        *self.level.read()
    }

    fn set_level(&self, level: Level) {
        *self.level.write() = level;
    }

    fn time_format(&self) -> String {
        self.time_format.read().clone()
    }

    fn set_time_format(&self, format: &str) {
        *self.time_format.write() = format.to_string();
    }

    fn write(&self, record: &Record) -> Result<()> {
        if record.level < *self.level.read() {
            return Ok(());
        }

        let line = record.render(&self.time_format.read(), self.use_colors, self.detail);

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }
}
