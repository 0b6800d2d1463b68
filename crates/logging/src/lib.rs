// logging crate
//
// Console output for the CLI lives here. Validation diagnostics never go
// through it: they are written to an explicit `LogSink` owned by the caller.
// Console lines always go to stderr; stdout carries the command's JSON.

mod sink;

pub use sink::{FileSink, LogSink, MemorySink, SinkError};

use chrono::Local;
use once_cell::sync::Lazy;
use std::sync::Mutex;

// Console threshold, set once by the binary from its flags
static LOG_LEVEL: Lazy<Mutex<LogLevel>> = Lazy::new(|| Mutex::new(LogLevel::Warning));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Debug => "🔍",
            LogLevel::Info => "ℹ️",
            LogLevel::Warning => "⚠️",
            LogLevel::Error => "❌",
        }
    }
}

pub fn set_log_level(level: LogLevel) {
    if let Ok(mut current_level) = LOG_LEVEL.lock() {
        *current_level = level;
    }
}

pub fn get_log_level() -> LogLevel {
    if let Ok(level) = LOG_LEVEL.lock() {
        *level
    } else {
        LogLevel::Warning
    }
}

fn format_line(level: LogLevel, message: &str) -> String {
    let timestamp = Local::now().format("%H:%M:%S").to_string();
    format!("[{}] {} {}", timestamp, level.prefix(), message)
}

/// Print a message if `level` meets the current threshold.
pub fn log(level: LogLevel, message: &str) {
    if level < get_log_level() {
        return;
    }

    eprintln!("{}", format_line(level, message));
}

pub fn debug(message: &str) {
    log(LogLevel::Debug, message);
}

pub fn info(message: &str) {
    log(LogLevel::Info, message);
}

pub fn warning(message: &str) {
    log(LogLevel::Warning, message);
}

pub fn error(message: &str) {
    log(LogLevel::Error, message);
}
