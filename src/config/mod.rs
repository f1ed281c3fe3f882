//! Configuration module for the onboarding wizard
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::OnboardPaths;
pub use settings::Settings;
