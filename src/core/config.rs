//! Logger configuration surface
//!
//! The external CLI/config collaborator fills this struct in; the engine
//! only consumes it. Every field has a default so partial configuration
//! documents deserialize cleanly.

use super::error::Result;
use super::level::Level;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default log file location when none is configured.
pub const DEFAULT_LOG_FILE: &str = "./log.txt";

/// Initial settings for a [`Logger`](crate::Logger).
///
/// # Example
///
/// ```
/// use logline::{Level, LoggerConfig};
///
/// let config = LoggerConfig::from_json_str(r#"{"level": "warn"}"#).unwrap();
/// assert_eq!(config.level, Level::Warn);
/// assert!(!config.file_logging);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Minimum level a record must have to be emitted. Defaults to `Trace`
    /// (everything enabled).
    pub level: Level,
    /// Path of the append-only log file.
    pub file_path: PathBuf,
    /// Whether the file sink is opened at startup.
    pub file_logging: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::Trace,
            file_path: PathBuf::from(DEFAULT_LOG_FILE),
            file_logging: false,
        }
    }
}

impl LoggerConfig {
    /// Parse a configuration document from JSON.
    ///
    /// Unknown fields are ignored; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
