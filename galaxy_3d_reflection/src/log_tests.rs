//! Unit tests for log.rs
//!
//! Tests LogSeverity ordering/tags and DefaultLogger formatting.

use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
use std::time::SystemTime;

fn entry(severity: LogSeverity, file: Option<&'static str>, line: Option<u32>) -> LogEntry {
    LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: "galaxy3d::reflection::Gate".to_string(),
        message: "camera 4 outside activation volume".to_string(),
        file,
        line,
    }
}

// ============================================================================
// LOG SEVERITY
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_tags_are_fixed_width() {
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        assert_eq!(severity.tag().len(), 5);
    }
}

// ============================================================================
// DEFAULT LOGGER
// ============================================================================

#[test]
fn test_format_plain_without_location() {
    let line = DefaultLogger::format_plain(&entry(LogSeverity::Trace, None, None));
    assert!(line.contains("[TRACE]"));
    assert!(line.contains("[galaxy3d::reflection::Gate]"));
    assert!(line.ends_with("camera 4 outside activation volume"));
}

#[test]
fn test_format_plain_with_location() {
    let line = DefaultLogger::format_plain(&entry(LogSeverity::Error, Some("synthesizer.rs"), Some(88)));
    assert!(line.contains("[ERROR]"));
    assert!(line.ends_with("(synthesizer.rs:88)"));
}

#[test]
fn test_default_logger_all_severities() {
    let logger = DefaultLogger;
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
    ] {
        // Just verify it doesn't panic
        logger.log(&entry(severity, None, None));
    }
    logger.log(&entry(LogSeverity::Error, Some("gate.rs"), Some(12)));
}
