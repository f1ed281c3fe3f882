//! Terminal User Interface module
//!
//! Runs the onboarding wizard full-screen with ratatui: one form per step,
//! inline field errors, toasts and a confirmation dialog after submitting.

pub mod app;
pub mod event;
pub mod form;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
