//! Path management for the onboarding wizard
//!
//! Provides XDG-compliant path resolution for configuration, attachment
//! blobs, saved submissions and logs.
//!
//! ## Path Resolution Order
//!
//! 1. `ONBOARD_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/onboard` or `~/.config/onboard`
//! 3. Windows: `%APPDATA%\onboard`

use std::path::PathBuf;

use crate::error::OnboardError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "ONBOARD_DATA_DIR";

/// Manages all paths used by the wizard
#[derive(Debug, Clone)]
pub struct OnboardPaths {
    /// Base directory for all onboarding data
    base_dir: PathBuf,
}

impl OnboardPaths {
    /// Create a new OnboardPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, OnboardError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create OnboardPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/onboard/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/onboard/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Root of the attachment blob databases
    pub fn blob_dir(&self) -> PathBuf {
        self.data_dir().join("blobs")
    }

    /// Directory where accepted submissions are written
    pub fn submissions_dir(&self) -> PathBuf {
        self.data_dir().join("submissions")
    }

    /// Directory for rolling log files
    pub fn log_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base and data directories exist
    ///
    /// The blob and submission directories are created by their owners on
    /// first use so that an unwritable attachment area does not block the
    /// wizard from starting.
    pub fn ensure_directories(&self) -> Result<(), OnboardError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| OnboardError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| OnboardError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, OnboardError> {
    if let Ok(config_home) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(config_home).join("onboard"));
    }
    let home = std::env::var("HOME")
        .map_err(|_| OnboardError::Config("HOME environment variable not set".into()))?;
    Ok(PathBuf::from(home).join(".config").join("onboard"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, OnboardError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| OnboardError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("onboard"))
}
