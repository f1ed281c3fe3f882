//! User settings for the onboarding wizard
//!
//! Controls where attachments are kept, whether accepted submissions are
//! saved to disk, and the default log filter.

use serde::{Deserialize, Serialize};

use super::paths::OnboardPaths;
use crate::error::OnboardError;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Name of the attachment database
    #[serde(default = "default_blob_database")]
    pub blob_database: String,

    /// Version of the attachment database layout
    #[serde(default = "default_blob_version")]
    pub blob_version: u32,

    /// Persist attachments across sessions (false keeps them in memory only)
    #[serde(default = "default_true")]
    pub persist_attachments: bool,

    /// Write each accepted submission to the submissions directory
    #[serde(default = "default_true")]
    pub save_submissions: bool,

    /// Default tracing filter; `RUST_LOG` takes precedence
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_blob_database() -> String {
    "CompanyFormDB".to_string()
}

fn default_blob_version() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            blob_database: default_blob_database(),
            blob_version: default_blob_version(),
            persist_attachments: true,
            save_submissions: true,
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &OnboardPaths) -> Result<Self, OnboardError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                OnboardError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                OnboardError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &OnboardPaths) -> Result<(), OnboardError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            OnboardError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            OnboardError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
