//! Configuration types.
//!
//! This module defines the enums and the library `Config` struct shared by
//! the CLI and the web server.

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::{DB_PATH, DEFAULT_BIND, DEFAULT_PORT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// A configuration value that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// Human-readable explanation
    pub message: String,
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigValidationError {}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```
/// use milk_log::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     db_path: PathBuf::from("/var/lib/milk_log/records.db"),
///     port: 8080,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// assert_eq!(config.socket_addr(), "0.0.0.0:8080");
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Database path (SQLite file)
    pub db_path: PathBuf,

    /// Address the web server binds to
    pub bind: String,

    /// Port the web server listens on
    pub port: u16,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DB_PATH),
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Checks that the configuration can be used to start the application.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.db_path.as_os_str().is_empty() {
            return Err(ConfigValidationError {
                field: "db_path",
                message: "must not be empty; pass --db-path or set MILK_LOG_DB_PATH".to_string(),
            });
        }
        if self.bind.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "bind",
                message: "must not be empty (e.g. 0.0.0.0 or 127.0.0.1)".to_string(),
            });
        }
        if self.port == 0 {
            return Err(ConfigValidationError {
                field: "port",
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Address string suitable for `TcpListener::bind`.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.db_path, PathBuf::from("./milk_records.db"));
        assert_eq!(config.bind, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.log_format, LogFormat::Plain);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let config = Config {
            port: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "port");
        assert!(err.message.contains("greater than 0"));
    }

    #[test]
    fn test_validate_rejects_empty_db_path() {
        let config = Config {
            db_path: PathBuf::new(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "db_path");
        assert_eq!(err.to_string(), format!("invalid db_path: {}", err.message));
    }

    #[test]
    fn test_validate_rejects_blank_bind() {
        let config = Config {
            bind: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().field, "bind");
    }

    #[test]
    fn test_socket_addr() {
        let config = Config {
            bind: "127.0.0.1".to_string(),
            port: 8080,
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "127.0.0.1:8080");
    }
}
