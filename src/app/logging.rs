//! Process-wide logging to `logs/execution.log`.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use crate::domain::AppError;

/// Directory holding the execution log, relative to the working directory.
pub const LOG_DIR: &str = "logs";

/// Execution log filename.
pub const LOG_FILE: &str = "execution.log";

/// Initialize the global tracing subscriber, appending line-oriented
/// records (timestamp, level, message) to `logs/execution.log`.
///
/// Call once at process start; the subscriber flushes on each write, so no
/// explicit teardown is needed at exit.
pub fn init(base_dir: &Path) -> Result<(), AppError> {
    let log_dir = base_dir.join(LOG_DIR);
    fs::create_dir_all(&log_dir)?;

    let file = OpenOptions::new().create(true).append(true).open(log_dir.join(LOG_FILE))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();

    Ok(())
}
