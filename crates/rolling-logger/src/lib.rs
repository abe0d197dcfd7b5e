//! Rolling Logger
//!
//! `log` backend that keeps the most recent lines in a circular buffer
//! and mirrors every record to the browser console.

use std::collections::VecDeque;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of lines kept in memory
pub const DEFAULT_CAPACITY: usize = 200;

/// Fixed-size line buffer; the oldest line is dropped when full
#[derive(Debug, Clone)]
pub struct RollingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RollingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Buffered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub struct RollingLogger {
    level: LevelFilter,
    buffer: Mutex<RollingBuffer>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            buffer: Mutex::new(RollingBuffer::new(capacity)),
        }
    }

    /// Snapshot of the buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        self.buffer
            .lock()
            .map(|buffer| buffer.lines())
            .unwrap_or_default()
    }

    /// Replay the buffered lines to the console, oldest first.
    ///
    /// Meant for panic hooks: uses `try_lock`, so a panic raised while the
    /// buffer is held writes nothing instead of deadlocking. Returns the
    /// number of lines written.
    pub fn dump(&self) -> usize {
        let Ok(buffer) = self.buffer.try_lock() else {
            return 0;
        };
        write_console(Level::Info, &format!("--- last {} log lines ---", buffer.len()));
        for line in buffer.lines.iter() {
            write_console(Level::Info, line);
        }
        buffer.len()
    }
}

/// Format a record as `HH:MM:SS.mmm LEVEL [target] message`
pub fn format_line(record: &Record) -> String {
    format!(
        "{} {:<5} [{}] {}",
        chrono::Utc::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record);
        write_console(record.level(), &line);
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, _line: &str) {}

/// Install the logger globally. Can only succeed once per page.
pub fn init(level: LevelFilter) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger: &'static RollingLogger = Box::leak(Box::new(RollingLogger::new(level, DEFAULT_CAPACITY)));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_drops_oldest_line() {
        let mut buffer = RollingBuffer::new(2);
        buffer.push("one".to_string());
        buffer.push("two".to_string());
        buffer.push("three".to_string());

        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.lines(), vec!["two".to_string(), "three".to_string()]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut buffer = RollingBuffer::new(0);
        buffer.push("ignored".to_string());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_logger_respects_level() {
        let logger = RollingLogger::new(LevelFilter::Warn, 10);

        logger.log(
            &Record::builder()
                .level(Level::Info)
                .target("cart")
                .args(format_args!("skipped"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Warn)
                .target("cart")
                .args(format_args!("storage unavailable"))
                .build(),
        );

        let recent = logger.recent();
        assert_eq!(recent.len(), 1);
        assert!(recent[0].contains("WARN"));
        assert!(recent[0].ends_with("[cart] storage unavailable"));
    }

    #[test]
    fn test_dump_replays_buffer() {
        let logger = RollingLogger::new(LevelFilter::Debug, 10);
        assert_eq!(logger.dump(), 0);

        for msg in ["cart read degraded to empty", "order placed with 2 line items"] {
            logger.log(
                &Record::builder()
                    .level(Level::Info)
                    .target("cart")
                    .args(format_args!("{}", msg))
                    .build(),
            );
        }

        assert_eq!(logger.dump(), 2);
        // dumping leaves the buffer intact
        assert_eq!(logger.recent().len(), 2);
    }

    #[test]
    fn test_dump_skips_held_buffer() {
        let logger = RollingLogger::new(LevelFilter::Debug, 10);
        let _held = logger.buffer.lock().unwrap();
        assert_eq!(logger.dump(), 0);
    }
}
