//! Logging system for Galaxy3D Reflection
//!
//! This module provides a flexible logging system with:
//! - Customizable sink via the Logger trait
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - File and line information for ERROR entries
//!
//! The per-frame path (gate, synthesizer) logs at Trace/Debug. Those
//! entries are filtered by `Engine::set_log_level` before they reach
//! the logger.

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// # Example
///
/// ```no_run
/// use galaxy_3d_reflection::galaxy3d::log::{Logger, LogEntry};
///
/// struct FrameLogger;
///
/// impl Logger for FrameLogger {
///     fn log(&self, entry: &LogEntry) {
///         eprintln!("{} {}", entry.source, entry.message);
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source module (e.g. "galaxy3d::reflection::Gate")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-frame decisions (gate verdicts, target allocation)
    Trace,

    /// Lifecycle events (virtual camera created/destroyed, publish skips)
    Debug,

    /// Important informational messages
    Info,

    /// Warning messages
    Warn,

    /// Error messages (with file:line details)
    Error,
}

impl LogSeverity {
    /// Fixed-width tag used by the default logger
    pub fn tag(&self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }
}

/// Default logger: colored console output
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl DefaultLogger {
    /// Render an entry as a single line (without colors)
    pub fn format_plain(entry: &LogEntry) -> String {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f");

        match (entry.file, entry.line) {
            (Some(file), Some(line)) => format!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp, entry.severity.tag(), entry.source, entry.message, file, line
            ),
            _ => format!(
                "[{}] [{}] [{}] {}",
                timestamp, entry.severity.tag(), entry.source, entry.message
            ),
        }
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let tag = entry.severity.tag();
        let severity_str = match entry.severity {
            LogSeverity::Trace => tag.bright_black(),
            LogSeverity::Debug => tag.cyan(),
            LogSeverity::Info => tag.green(),
            LogSeverity::Warn => tag.yellow(),
            LogSeverity::Error => tag.red().bold(),
        };

        let source = entry.source.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp, severity_str, source, entry.message, file, line
            );
        } else {
            println!("[{}] [{}] [{}] {}", timestamp, severity_str, source, entry.message);
        }
    }
}

// ===== LOGGING MACROS =====
//
// Arguments are only formatted when the severity passes the threshold.

/// Log a TRACE message
///
/// ```no_run
/// # use galaxy_3d_reflection::engine_trace;
/// engine_trace!("galaxy3d::reflection::Gate", "camera {} skipped", 3);
/// ```
#[macro_export]
macro_rules! engine_trace {
    ($source:expr, $($arg:tt)*) => {
        if $crate::galaxy3d::Engine::is_enabled($crate::galaxy3d::log::LogSeverity::Trace) {
            $crate::galaxy3d::Engine::log(
                $crate::galaxy3d::log::LogSeverity::Trace,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log a DEBUG message
#[macro_export]
macro_rules! engine_debug {
    ($source:expr, $($arg:tt)*) => {
        if $crate::galaxy3d::Engine::is_enabled($crate::galaxy3d::log::LogSeverity::Debug) {
            $crate::galaxy3d::Engine::log(
                $crate::galaxy3d::log::LogSeverity::Debug,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log an INFO message
#[macro_export]
macro_rules! engine_info {
    ($source:expr, $($arg:tt)*) => {
        if $crate::galaxy3d::Engine::is_enabled($crate::galaxy3d::log::LogSeverity::Info) {
            $crate::galaxy3d::Engine::log(
                $crate::galaxy3d::log::LogSeverity::Info,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log a WARN message
#[macro_export]
macro_rules! engine_warn {
    ($source:expr, $($arg:tt)*) => {
        if $crate::galaxy3d::Engine::is_enabled($crate::galaxy3d::log::LogSeverity::Warn) {
            $crate::galaxy3d::Engine::log(
                $crate::galaxy3d::log::LogSeverity::Warn,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log an ERROR message with file:line information
#[macro_export]
macro_rules! engine_error {
    ($source:expr, $($arg:tt)*) => {
        if $crate::galaxy3d::Engine::is_enabled($crate::galaxy3d::log::LogSeverity::Error) {
            $crate::galaxy3d::Engine::log_detailed(
                $crate::galaxy3d::log::LogSeverity::Error,
                $source,
                format!($($arg)*),
                file!(),
                line!()
            )
        }
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
