//! Logging configuration and utilities for arbor.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Log level for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn rank(self) -> u8 {
        match self {
            LogLevel::Error => 0,
            LogLevel::Warn => 1,
            LogLevel::Info => 2,
            LogLevel::Debug => 3,
            LogLevel::Trace => 4,
        }
    }

    /// Check if this level should log messages at the given level
    pub fn should_log(&self, level: LogLevel) -> bool {
        self.rank() >= level.rank()
    }

    /// Maps a repeated `-v` flag count onto a level: zero is `Info`, one
    /// is `Debug`, two or more is `Trace`.
    pub fn from_verbosity(count: u8) -> Self {
        match count {
            0 => LogLevel::Info,
            1 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }

    fn label(self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level to output
    pub level: LogLevel,
    /// Output format
    pub format: LogFormat,
    /// Enable timestamps
    #[serde(default = "default_true")]
    pub timestamps: bool,
    /// Component-specific log levels
    #[serde(default)]
    pub component_levels: HashMap<String, LogLevel>,
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Plain,
            timestamps: true,
            component_levels: HashMap::new(),
        }
    }
}

impl LoggingConfig {
    /// Create a new logging config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log level
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the log format
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set a component-specific log level
    pub fn with_component_level(mut self, component: impl Into<String>, level: LogLevel) -> Self {
        self.component_levels.insert(component.into(), level);
        self
    }

    /// Get the effective log level for a component
    pub fn effective_level(&self, component: Option<&str>) -> LogLevel {
        if let Some(comp) = component {
            if let Some(&level) = self.component_levels.get(comp) {
                return level;
            }
        }
        self.level
    }

    /// Check if a message at the given level should be logged
    pub fn should_log(&self, level: LogLevel, component: Option<&str>) -> bool {
        let effective = self.effective_level(component);
        effective.should_log(level)
    }
}

/// A log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub component: Option<String>,
    pub message: String,
}

impl LogEntry {
    /// Create a new log entry
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            level,
            component: None,
            message: message.into(),
        }
    }

    /// Create a log entry with a component
    pub fn with_component(
        level: LogLevel,
        component: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            level,
            component: Some(component.into()),
            message: message.into(),
        }
    }
}

/// Filters and emits log entries to stderr according to a [`LoggingConfig`].
#[derive(Debug, Clone, Default)]
pub struct Logger {
    config: LoggingConfig,
}

impl Logger {
    /// Create a logger from the given config
    pub fn new(config: LoggingConfig) -> Self {
        Self { config }
    }

    /// Formats an entry per the configured output format.
    pub fn format_entry(&self, entry: &LogEntry) -> String {
        match self.config.format {
            LogFormat::Json => {
                serde_json::to_string(entry).unwrap_or_else(|_| entry.message.clone())
            }
            LogFormat::Plain => {
                let mut line = String::new();
                if self.config.timestamps {
                    line.push_str(&entry.timestamp);
                    line.push(' ');
                }
                line.push_str(entry.level.label());
                if let Some(component) = &entry.component {
                    line.push_str(" [");
                    line.push_str(component);
                    line.push(']');
                }
                line.push(' ');
                line.push_str(&entry.message);
                line
            }
            LogFormat::Compact => format!("{} {}", entry.level.label(), entry.message),
        }
    }

    /// Emit the entry to stderr if its level passes the configured filter
    pub fn log(&self, entry: LogEntry) {
        if self.config.should_log(entry.level, entry.component.as_deref()) {
            eprintln!("{}", self.format_entry(&entry));
        }
    }

    /// Log an info message
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogEntry::new(LogLevel::Info, message));
    }

    /// Log a debug message with a component
    pub fn debug(&self, component: &str, message: impl Into<String>) {
        self.log(LogEntry::with_component(LogLevel::Debug, component, message));
    }

    /// Log a warning message
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogEntry::new(LogLevel::Warn, message));
    }

    /// Log an error message
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogEntry::new(LogLevel::Error, message));
    }
}
