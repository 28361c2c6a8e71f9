//! Rolling Logger
//!
//! `log` backend that keeps the most recent records in a circular buffer
//! and mirrors every record to the browser console (stderr off-browser).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock, PoisonError};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Number of records kept when no capacity is given
pub const DEFAULT_CAPACITY: usize = 500;

/// One formatted log record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub timestamp: String,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogLine {
    /// Console representation: `12:00:01.250 INFO  wishlist_ui::app - message`
    pub fn format(&self) -> String {
        format!(
            "{} {:<5} {} - {}",
            self.timestamp, self.level, self.target, self.message
        )
    }
}

/// Logger with a bounded ring of recent lines
pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<LogLine>>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            level,
            capacity,
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Append a line, evicting the oldest one when full
    pub fn push(&self, line: LogLine) {
        let mut lines = self.lines.lock().unwrap_or_else(PoisonError::into_inner);
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Copy of the buffered lines, oldest first
    pub fn snapshot(&self) -> Vec<LogLine> {
        let lines = self.lines.lock().unwrap_or_else(PoisonError::into_inner);
        lines.iter().cloned().collect()
    }

    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = LogLine {
            timestamp: chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        mirror_to_console(&line);
        self.push(line);
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Install the global logger. Calling it twice returns the `log` error.
pub fn init_logger(
    level: LevelFilter,
    capacity: usize,
) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(logger.level());
    Ok(logger)
}

/// Lines buffered by the global logger (empty before `init_logger`)
pub fn recent_lines() -> Vec<LogLine> {
    LOGGER.get().map(RollingLogger::snapshot).unwrap_or_default()
}

/// Drop everything the global logger has buffered so far
pub fn clear_recent() {
    if let Some(logger) = LOGGER.get() {
        logger.clear();
    }
}

/// One formatted line per record, oldest first
pub fn dump(lines: &[LogLine]) -> String {
    lines.iter().map(LogLine::format).collect::<Vec<_>>().join("\n")
}

#[cfg(target_arch = "wasm32")]
fn mirror_to_console(line: &LogLine) {
    let text = wasm_bindgen::JsValue::from_str(&line.format());
    match line.level {
        Level::Error => web_sys::console::error_1(&text),
        Level::Warn => web_sys::console::warn_1(&text),
        Level::Info => web_sys::console::info_1(&text),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&text),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn mirror_to_console(line: &LogLine) {
    eprintln!("{}", line.format());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(message: &str) -> LogLine {
        LogLine {
            timestamp: "00:00:00.000".to_string(),
            level: Level::Info,
            target: "test".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_ring_evicts_oldest() {
        let logger = RollingLogger::new(LevelFilter::Info, 2);
        logger.push(line("a"));
        logger.push(line("b"));
        logger.push(line("c"));

        let messages: Vec<_> = logger.snapshot().into_iter().map(|l| l.message).collect();
        assert_eq!(messages, vec!["b", "c"]);
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let logger = RollingLogger::new(LevelFilter::Info, 0);
        logger.push(line("a"));
        logger.push(line("b"));
        assert_eq!(logger.snapshot().len(), 1);
    }

    #[test]
    fn test_level_filtering() {
        let logger = RollingLogger::new(LevelFilter::Warn, 10);
        logger.log(
            &Record::builder()
                .level(Level::Info)
                .target("test")
                .args(format_args!("dropped"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Error)
                .target("test")
                .args(format_args!("kept"))
                .build(),
        );

        let lines = logger.snapshot();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].message, "kept");
        assert_eq!(lines[0].level, Level::Error);
    }

    #[test]
    fn test_clear() {
        let logger = RollingLogger::new(LevelFilter::Info, 10);
        logger.push(line("a"));
        logger.clear();
        assert!(logger.snapshot().is_empty());
    }

    #[test]
    fn test_dump_joins_formatted_lines() {
        let dumped = dump(&[line("a"), line("b")]);
        assert_eq!(dumped, "00:00:00.000 INFO  test - a\n00:00:00.000 INFO  test - b");
        assert_eq!(dump(&[]), "");
    }

    #[test]
    fn test_global_buffer_empty_before_init() {
        clear_recent();
        assert!(recent_lines().is_empty());
    }

    #[test]
    fn test_format() {
        assert_eq!(line("hello").format(), "00:00:00.000 INFO  test - hello");
    }
}
