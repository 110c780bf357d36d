//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ANSI reset escape, appended after every colored span.
pub const ANSI_RESET: &str = "\x1b[0m";

const ANSI_GREY: &str = "\x1b[90m";
const ANSI_BLUE: &str = "\x1b[34m";
const ANSI_GREEN: &str = "\x1b[32m";
const ANSI_YELLOW: &str = "\x1b[33m";
const ANSI_RED: &str = "\x1b[31m";
const ANSI_WHITE_ON_RED: &str = "\x1b[41;97m";

/// Severity of a log record.
///
/// Levels are totally ordered; a record passes the filter when
/// `record.level >= threshold`. `Off` is a filter sentinel: setting the
/// threshold to `Off` suppresses everything, and it is never attached to a
/// real record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
    Off = 6,
}

impl Level {
    pub fn to_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
            Level::Off => "OFF",
        }
    }

    /// ANSI escape emitted in front of a console line at this level.
    ///
    /// Escapes are emitted unconditionally; there is no tty detection.
    pub fn color_code(&self) -> &'static str {
        match self {
            Level::Trace => ANSI_GREY,
            Level::Debug => ANSI_BLUE,
            Level::Info => ANSI_GREEN,
            Level::Warn => ANSI_YELLOW,
            Level::Error => ANSI_RED,
            Level::Fatal => ANSI_WHITE_ON_RED,
            Level::Off => ANSI_RESET,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(Level::Trace),
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "ERROR" => Ok(Level::Error),
            "FATAL" => Ok(Level::Fatal),
            "OFF" => Ok(Level::Off),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
