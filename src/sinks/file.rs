//! File sink implementation
//!
//! Append-only text file behind a [`BufWriter`]. Opened when file logging is
//! enabled, closed (and flushed) when it is disabled or the worker exits.
//! The handle is touched only by the owner of the surrounding lock, so the
//! write itself needs no extra synchronization.

use crate::core::{LogRecord, LoggerError, Result, Sink};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct FileSink {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl FileSink {
    /// Open `path` in append mode, creating the file if needed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::file_sink(path.display().to_string(), e.to_string()))?;

        Ok(Self {
            writer: BufWriter::new(file),
            path,
        })
    }

    /// Path this sink was opened with.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write(&mut self, record: &LogRecord) -> Result<()> {
        self.writer.write_all(record.line.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Closing the sink must not lose buffered lines
        let _ = self.writer.flush();
    }
}
