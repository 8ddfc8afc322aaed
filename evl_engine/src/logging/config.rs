//! Environment-driven logging preferences

use super::events::LogLevel;
use std::env;
use std::sync::OnceLock;

/// Runtime logging preferences, resolved once per process
#[derive(Debug, Clone)]
pub struct LoggingPreferences {
    /// Minimum level that gets logged
    pub min_log_level: LogLevel,
    /// Whether to emit JSON instead of human-readable lines
    pub structured_logging: bool,
    /// Whether console output is enabled at all
    pub console_logging: bool,
    /// Event buffer size for the in-memory logger
    pub event_buffer_size: usize,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            min_log_level: parse_log_level(env::var("EVL_LOG_LEVEL").ok().as_deref()),
            structured_logging: env::var("EVL_STRUCTURED_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            console_logging: env::var("EVL_CONSOLE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            event_buffer_size: env::var("EVL_LOG_BUFFER_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(crate::config::constants::compile_time::logging::LOG_BUFFER_SIZE),
        }
    }
}

static RUNTIME_PREFERENCES: OnceLock<LoggingPreferences> = OnceLock::new();

fn preferences() -> &'static LoggingPreferences {
    RUNTIME_PREFERENCES.get_or_init(LoggingPreferences::default)
}

fn parse_log_level(value: Option<&str>) -> LogLevel {
    match value {
        Some("error") | Some("ERROR") => LogLevel::Error,
        Some("warn") | Some("WARN") | Some("warning") => LogLevel::Warning,
        Some("debug") | Some("DEBUG") => LogLevel::Debug,
        _ => LogLevel::Info,
    }
}

/// Get the configured minimum log level
pub fn get_min_log_level() -> LogLevel {
    preferences().min_log_level
}

/// Whether JSON output is configured
pub fn use_structured_logging() -> bool {
    preferences().structured_logging
}

/// Whether console output is configured
pub fn use_console_logging() -> bool {
    preferences().console_logging
}

/// Configured buffer size for the in-memory logger
pub fn get_event_buffer_size() -> usize {
    preferences().event_buffer_size
}

/// Validate the resolved configuration
pub fn validate_config() -> Result<(), String> {
    let prefs = preferences();
    if prefs.event_buffer_size == 0 {
        return Err("EVL_LOG_BUFFER_SIZE must be greater than zero".to_string());
    }
    Ok(())
}

/// One-line configuration summary for diagnostics
pub fn get_config_summary() -> String {
    let prefs = preferences();
    format!(
        "Logging: level={}, structured={}, console={}, buffer={}",
        prefs.min_log_level.as_str(),
        prefs.structured_logging,
        prefs.console_logging,
        prefs.event_buffer_size
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level(Some("error")), LogLevel::Error);
        assert_eq!(parse_log_level(Some("WARN")), LogLevel::Warning);
        assert_eq!(parse_log_level(Some("debug")), LogLevel::Debug);
        assert_eq!(parse_log_level(Some("bogus")), LogLevel::Info);
        assert_eq!(parse_log_level(None), LogLevel::Info);
    }

    #[test]
    fn test_validate_config() {
        assert!(validate_config().is_ok());
    }

    #[test]
    fn test_config_summary() {
        let summary = get_config_summary();
        assert!(summary.contains("Logging: level="));
    }
}
