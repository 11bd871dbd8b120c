//! Append-only file logging.
//!
//! Every connection event, order attempt, and validation failure is written
//! as one plain-text record per line. Interactive output goes to stdout
//! separately; the log file is the audit trail and is never truncated or
//! rotated by this process.

use crate::error::AppError;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing::Level;

/// Binds the global `tracing` subscriber to an append-only log file.
///
/// ANSI escapes are disabled; one record per line. Calling this a second
/// time in the same process is a no-op, the first subscriber wins.
pub fn setup_logger(path: &str) -> Result<(), AppError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .ok();

    Ok(())
}
