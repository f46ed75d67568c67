//! Log setup.
//!
//! The terminal belongs to the game while it runs, so log records go to
//! `~/.barhopper/barhopper.log` instead of stderr. `RUST_LOG` overrides the
//! default `info` filter.

use super::persistence;
use crate::core::constants::LOG_FILENAME;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;

/// Route the `log` facade to the log file. Returns the file path.
pub fn init_logging() -> io::Result<PathBuf> {
    let path = persistence::save_path(LOG_FILENAME)?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))?;

    Ok(path)
}
