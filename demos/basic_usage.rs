//! Basic usage example
//!
//! Demonstrates leveled console logging with call-site capture.
//!
//! Run with: cargo run --example basic_usage

use logline::prelude::*;
use logline::{debug, error, info, trace, warn};

fn main() {
    println!("=== Logline - Basic Usage Example ===\n");

    let logger = Logger::builder().min_level(Level::Trace).build();

    trace!(logger, "Entering main");
    debug!(logger, "Loading configuration...");
    info!(logger, "Application started");
    info!(logger, "Listening on port {}", 8080);
    warn!(logger, "Using default settings for some options");
    error!(logger, "Failed to load optional plugin: {}", "metrics");

    // Raising the threshold silences lower levels from here on
    logger.set_min_level(Level::Warn);
    info!(logger, "This line is filtered out");
    warn!(logger, "This one still appears");

    // Teardown drains every queued record before the worker exits
    logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);

    println!("\n=== Example completed successfully! ===");
}
