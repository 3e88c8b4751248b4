use crate::{Error, Result};
use tracing::Level;

/// Human readable log lines on stderr, keeping stdout free for the report.
pub fn setup_simple_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .with_thread_names(true)
        .try_init()
        .map_err(|e| Error::General(e.to_string()))
}

pub fn setup_json_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .json()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .with_thread_names(true)
        .try_init()
        .map_err(|e| Error::General(e.to_string()))
}
