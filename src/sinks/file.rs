//! File sink implementation

use crate::core::{Level, LogError, Record, Result, Sink, DEFAULT_TIME_FORMAT};
use parking_lot::{Mutex, RwLock};
use std::fs::{File, OpenOptions};
use std::io::{LineWriter, Write};
use std::path::{Path, PathBuf};

/// Appends records to a file, one line per record.
///
/// The file is opened in append mode lazily on the first write, or eagerly on
/// an explicit path change. A `LineWriter` hands each completed line to the
/// OS at the trailing newline, so records survive an abrupt process exit once
/// their write call returned.
pub struct FileSink {
    name: String,
    level: RwLock<Level>,
    time_format: RwLock<String>,
    detail: bool,
    path: RwLock<PathBuf>,
    writer: Mutex<Option<LineWriter<File>>>,
}

impl FileSink {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            level: RwLock::new(Level::Debug),
            time_format: RwLock::new(DEFAULT_TIME_FORMAT.to_string()),
            detail: true,
            path: RwLock::new(path.into()),
            writer: Mutex::new(None),
        }
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

    /// Include or omit the pid/file:line/module segment in each line.
    #[must_use]
    pub fn with_detail(mut self, detail: bool) -> Self {
        self.detail = detail;
        self
    }

    pub fn path(&self) -> PathBuf {
        self.path.read().clone()
    }

    /// Switch the target path, reopening immediately.
    ///
    /// Unlike the lazy first-write open, a bad path is reported here, from
    /// the call that caused it; the previous file stays in effect on failure.
    pub fn set_path(&self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        let writer = Self::open(&path)?;
        *self.path.write() = path;
        *self.writer.lock() = Some(writer);
        Ok(())
    }

    fn open(path: &Path) -> Result<LineWriter<File>> {
        if path.as_os_str().is_empty() {
            return Err(LogError::config("FileSink", "log file path must be set"));
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LogError::file_sink(path.display().to_string(), e.to_string()))?;
        Ok(LineWriter::new(file))
    }
}

impl Sink for FileSink {
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

        let mut guard = self.writer.lock();
        if guard.is_none() {
            *guard = Some(Self::open(&self.path.read())?);
        }
        let writer = guard
            .as_mut()
            .ok_or_else(|| LogError::writer("file writer not initialized"))?;

        let line = record.render(&self.time_format.read(), false, self.detail);
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        if let Some(writer) = self.writer.lock().as_mut() {
            writer.flush()?;
        }
        Ok(())
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Ensure any partially buffered line reaches disk
        let _ = self.flush();
    }
}
