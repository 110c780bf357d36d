//! File logging example
//!
//! Demonstrates routing records to the console and to an append-only file.
//!
//! Run with: cargo run --example file_logging

use logline::prelude::*;
use logline::{error_file, info, info_file, warn_file};

fn main() {
    println!("=== Logline - File Logging Example ===\n");

    let logger = Logger::builder()
        .min_level(Level::Trace)
        .log_file_path("application.log")
        .build();

    // A file call before enabling is turned into a console warning
    info_file!(logger, "this request is dropped with a warning");

    logger.enable_file_logging(true);

    info!(logger, "console: application started");
    info_file!(logger, "file: application started");

    for i in 1..=5 {
        info_file!(logger, "processing item {}/5", i);
        if i == 3 {
            warn_file!(logger, "item 3 took longer than expected");
        }
    }

    error_file!(logger, "simulated failure while closing connection");

    // Drains the queue and closes the file
    logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the file-destined lines");
}
