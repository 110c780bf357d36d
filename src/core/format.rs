//! Record rendering
//!
//! Pure functions that turn (level, call site, message) into the single
//! newline-terminated line a sink will write. The console variant carries
//! ANSI color escapes and no timestamp; the file variant carries a
//! human-readable timestamp and no escapes. Rendering happens at call time,
//! before the record is enqueued, so the worker never formats.

use super::call_site::CallSite;
use super::level::{Level, ANSI_RESET};
use chrono::{DateTime, Local};

/// ctime-style timestamp, e.g. `Wed Aug  5 09:15:02 2026`.
const FILE_TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Render the console variant of a line.
///
/// Shape: `<color>[<LEVEL>] <path>:<line> in function <reset>'<function>'<color>: <message><reset>\n`
pub fn render_console(level: Level, site: &CallSite, message: &str) -> String {
    let color = level.color_code();
    format!(
        "{}[{}] {}:{} in function {}'{}'{}: {}{}\n",
        color,
        level.to_str(),
        site.short_path(),
        site.line,
        ANSI_RESET,
        site.function,
        color,
        message,
        ANSI_RESET,
    )
}

/// Render the file variant of a line, stamped with the current local time.
pub fn render_file(level: Level, site: &CallSite, message: &str) -> String {
    render_file_at(level, site, message, Local::now())
}

/// Render the file variant at an explicit timestamp.
///
/// Shape: `[<timestamp>] - [<LEVEL>] <path>:<line> in function '<function>': <message>\n`
pub fn render_file_at(
    level: Level,
    site: &CallSite,
    message: &str,
    timestamp: DateTime<Local>,
) -> String {
    format!(
        "[{}] - [{}] {}:{} in function '{}': {}\n",
        timestamp.format(FILE_TIMESTAMP_FORMAT),
        level.to_str(),
        site.short_path(),
        site.line,
        site.function,
        message,
    )
}
