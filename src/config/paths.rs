//! Path management for VerziBiz
//!
//! Resolves where configuration and the log file live.
//!
//! ## Path Resolution Order
//!
//! 1. `VERZI_CLI_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory reported by `directories`
//!    (`~/.config/verzi-cli` on Linux, `%APPDATA%\verzi\verzi-cli\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::VerziError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "VERZI_CLI_DATA_DIR";

/// Manages all paths used by VerziBiz
#[derive(Debug, Clone)]
pub struct VerziPaths {
    /// Base directory for all VerziBiz files
    base_dir: PathBuf,
}

impl VerziPaths {
    /// Create a new VerziPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, VerziError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create VerziPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the TUI log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("verzi.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), VerziError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| VerziError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, VerziError> {
    ProjectDirs::from("biz", "verzi", "verzi-cli")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| VerziError::Config("Could not determine a home directory".into()))
}
