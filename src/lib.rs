//! Onboard - terminal-based company onboarding wizard
//!
//! This library provides the core of a three-step onboarding form: company
//! information, address and bank details, then services and a declaration.
//! Each step is validated before the wizard moves on, and the final step
//! hands the combined record to a submission sink.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Step drafts, validated details and option lists
//! - `validation`: Per-step schemas producing field errors
//! - `storage`: Attachment blob stores and atomic file writes
//! - `wizard`: Wizard state store, step controllers and the shell
//! - `submission`: Final payload and submission sinks
//! - `cli`: One-shot command handlers
//! - `tui`: Full-screen wizard
//!
//! # Example
//!
//! ```rust,ignore
//! use onboard::config::{OnboardPaths, Settings};
//!
//! let paths = OnboardPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod storage;
pub mod submission;
pub mod tui;
pub mod validation;
pub mod wizard;

pub use error::{OnboardError, OnboardResult};
