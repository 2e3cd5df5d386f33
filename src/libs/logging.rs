//! Tracing setup.
//!
//! The terminal belongs to the task window while it runs, so log lines are
//! appended to `taskman.log` in the data directory instead of stderr. The
//! filter comes from `RUST_LOG` and defaults to `info`.

use super::data_storage::DataStorage;
use anyhow::Result;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "taskman.log";

pub fn init() -> Result<()> {
    let log_path = DataStorage::new().get_path(LOG_FILE_NAME)?;
    let file = OpenOptions::new().create(true).append(true).open(&log_path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))?;

    tracing::debug!(path = %log_path.display(), "logging initialised");
    Ok(())
}
