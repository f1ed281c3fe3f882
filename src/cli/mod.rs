//! CLI command handlers
//!
//! One-shot commands that work on the same data as the wizard without
//! opening the TUI.

pub mod logo;
pub mod validate;

pub use logo::{handle_logo_command, LogoCommands};
pub use validate::handle_validate_command;
