//! Log record snapshot and line rendering

use super::level::Level;
use chrono::{DateTime, Local};
use colored::Colorize;
use serde::Serialize;
use std::fmt;
use std::fmt::Write as _;

/// Default strftime pattern for rendered timestamps.
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One log event, frozen once its builder completes.
///
/// Records are shared as `Arc<Record>` between the queue and every sink that
/// still needs them; nothing mutates a record after emission.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    pub level: Level,
    pub timestamp: DateTime<Local>,
    pub file: &'static str,
    pub line: u32,
    pub module_path: &'static str,
    pub message: String,
}

impl Record {
    pub fn new(level: Level, file: &'static str, line: u32, module_path: &'static str) -> Self {
        Self {
            level,
            timestamp: Local::now(),
            file,
            line,
            module_path,
            message: String::new(),
        }
    }

    /// Sanitize appended text to prevent log injection attacks.
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so one record always renders as exactly one output line.
    fn sanitize(text: &str) -> String {
        text.replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub(crate) fn append_message(&mut self, value: impl fmt::Display) {
        let text = value.to_string();
        if text.contains(['\n', '\r', '\t']) {
            self.message.push_str(&Self::sanitize(&text));
        } else {
            self.message.push_str(&text);
        }
    }

    /// Render this record as a single line, without a trailing newline.
    ///
    /// Layout: `<timestamp> [<level>] (<pid>) <file>:<line> <module> <message>`
    /// where the pid/location segment is controlled by `detail`.
    pub fn render(&self, time_format: &str, color: bool, detail: bool) -> String {
        let mut line = String::with_capacity(64 + self.message.len());

        let _ = write!(line, "{} ", self.timestamp.format(time_format));

        if color {
            let _ = write!(line, "[{}]", self.level.as_str().color(self.level.color_code()));
        } else {
            let _ = write!(line, "[{}]", self.level.as_str());
        }

        if detail {
            let _ = write!(
                line,
                " ({}) {}:{} {}",
                std::process::id(),
                self.file,
                self.line,
                self.module_path
            );
        }

        line.push(' ');
        line.push_str(&self.message);
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        let mut record = Record::new(Level::Info, "src/server.rs", 42, "app::server");
        record.append_message("listening on ");
        record.append_message(8080);
        record
    }

    #[test]
    fn test_message_accumulates() {
        let record = sample();
        assert_eq!(record.message, "listening on 8080");
    }

    #[test]
    fn test_render_plain() {
        let line = sample().render(DEFAULT_TIME_FORMAT, false, false);
        assert!(line.contains("[info]"));
        assert!(line.ends_with("listening on 8080"));
        assert!(!line.contains("src/server.rs"));
    }

    #[test]
    fn test_render_detail() {
        let line = sample().render(DEFAULT_TIME_FORMAT, false, true);
        assert!(line.contains("src/server.rs:42"));
        assert!(line.contains("app::server"));
        assert!(line.contains(&format!("({})", std::process::id())));
    }

    #[test]
    fn test_render_custom_time_format() {
        let line = sample().render("%Y/%m/%d", false, false);
        let date = line.split(' ').next().unwrap();
        assert_eq!(date.matches('/').count(), 2);
    }

    #[test]
    fn test_injection_is_escaped() {
        let mut record = Record::new(Level::Info, "a.rs", 1, "a");
        record.append_message("user\nfatal forged line\tend");
        assert!(!record.message.contains('\n'));
        assert!(!record.message.contains('\t'));
        assert!(record.message.contains("\\n"));
    }
}
