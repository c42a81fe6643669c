//! # Logging
//!
//! The terminal belongs to the table while the viewer runs, so log lines
//! never go to stdout or stderr. They are appended to the file named by
//! `QERNAL_LOG_FILE` when it is set and discarded otherwise. The level comes
//! from `RUST_LOG` (default `info`).

use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

pub fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .context("Failed to initialize tracing filter")?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false);

    // A subscriber may already be installed (tests); keep the existing one.
    match log_file {
        Some(path) => {
            let file = open_log_file(path)?;
            let _ = builder.with_writer(Mutex::new(file)).try_init();
        }
        None => {
            let _ = builder.with_writer(std::io::sink).try_init();
        }
    }

    Ok(())
}

pub fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}
