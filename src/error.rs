//! Custom error types for the onboarding wizard
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::validation::FieldErrors;

/// The main error type for onboarding operations
#[derive(Error, Debug)]
pub enum OnboardError {
    /// Configuration-related errors (settings file, paths)
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Field-level validation failures for a step
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// The attachment store could not be opened, read or written
    #[error("Attachment storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Storage misuse that degrading to memory would not fix (bad keys, etc.)
    #[error("Storage error: {0}")]
    Storage(String),

    /// The wizard was asked to render a step that does not exist
    #[error("Invalid wizard configuration: {0}")]
    Configuration(String),

    /// The submission collaborator rejected the final payload
    #[error("Submission error: {0}")]
    Submission(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl OnboardError {
    /// Create a configuration error for a step index outside 1..=3
    pub fn step_out_of_range(index: u8) -> Self {
        Self::Configuration(format!("step index {} is outside 1..=3", index))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if the failure means the blob store should be abandoned
    pub fn is_storage_unavailable(&self) -> bool {
        matches!(self, Self::StorageUnavailable(_))
    }
}

impl From<std::io::Error> for OnboardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for OnboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<FieldErrors> for OnboardError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}

/// Result type alias for onboarding operations
pub type OnboardResult<T> = Result<T, OnboardError>;
