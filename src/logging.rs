//! Tracing/logging initialization.
//!
//! CLI commands log to stderr. The TUI owns the terminal, so it logs to a
//! file in the data directory instead. `RUST_LOG` overrides the configured
//! level in both modes.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{Settings, VerziPaths};
use crate::error::{VerziError, VerziResult};

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File,
}

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initialize tracing for the process
///
/// Safe to call more than once; later calls are no-ops.
pub fn init(settings: &Settings, paths: &VerziPaths, target: LogTarget) -> VerziResult<()> {
    let filter = filter(&settings.log_level);

    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init();
        }
        LogTarget::File => {
            paths.ensure_directories()?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(paths.log_file())
                .map_err(|e| {
                    VerziError::Io(format!(
                        "Failed to open log file {}: {}",
                        paths.log_file().display(),
                        e
                    ))
                })?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init();
        }
    }
    Ok(())
}
