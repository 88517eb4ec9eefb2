/// Galaxy3D reflection - process-wide logging front-end
///
/// Reflection components are owned by their hosts and share nothing
/// with each other. The only global state is the logger and its
/// severity threshold, stored here behind OnceLock + RwLock.

use std::sync::{OnceLock, RwLock};
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::SystemTime;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Minimum severity forwarded to the logger (stored as `severity_to_u8`)
static LOG_LEVEL: AtomicU8 = AtomicU8::new(2);

fn severity_to_u8(severity: LogSeverity) -> u8 {
    match severity {
        LogSeverity::Trace => 0,
        LogSeverity::Debug => 1,
        LogSeverity::Info => 2,
        LogSeverity::Warn => 3,
        LogSeverity::Error => 4,
    }
}

fn severity_from_u8(value: u8) -> LogSeverity {
    match value {
        0 => LogSeverity::Trace,
        1 => LogSeverity::Debug,
        2 => LogSeverity::Info,
        3 => LogSeverity::Warn,
        _ => LogSeverity::Error,
    }
}

fn logger_lock() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

// ===== PUBLIC API =====

/// Logging front-end used by the `engine_*` macros
///
/// # Example
///
/// ```no_run
/// use galaxy_3d_reflection::galaxy3d::{Engine, log::{Logger, LogEntry, LogSeverity}};
///
/// struct Silent;
/// impl Logger for Silent {
///     fn log(&self, _entry: &LogEntry) {}
/// }
///
/// Engine::set_logger(Silent);
/// Engine::set_log_level(LogSeverity::Trace);
/// ```
pub struct Engine;

impl Engine {
    /// Replace the logger (file logger, test capture, etc.)
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to DefaultLogger
    pub fn reset_logger() {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Set the minimum severity forwarded to the logger (default: Info)
    pub fn set_log_level(severity: LogSeverity) {
        LOG_LEVEL.store(severity_to_u8(severity), Ordering::Relaxed);
    }

    /// Current minimum severity
    pub fn log_level() -> LogSeverity {
        severity_from_u8(LOG_LEVEL.load(Ordering::Relaxed))
    }

    /// Returns true if an entry of this severity would reach the logger
    pub fn is_enabled(severity: LogSeverity) -> bool {
        severity >= Self::log_level()
    }

    /// Log without file:line (engine_trace! .. engine_warn!)
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        Self::dispatch(severity, source, message, None, None);
    }

    /// Log with file:line (engine_error!)
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        Self::dispatch(severity, source, message, Some(file), Some(line));
    }

    fn dispatch(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: Option<&'static str>,
        line: Option<u32>,
    ) {
        if !Self::is_enabled(severity) {
            return;
        }
        if let Ok(lock) = logger_lock().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file,
                line,
            });
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
