//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::sync::Arc;
use tracing::info;

use crate::config::{OnboardPaths, Settings};
use crate::error::OnboardError;
use crate::storage::{BlobStore, ResilientBlobStore};
use crate::submission::{JsonFileSink, LogSink, SubmissionSink};
use crate::wizard::WizardStore;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;
use super::widgets::Notification;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Build the app from settings
pub fn build_app(paths: &OnboardPaths, settings: &Settings) -> App {
    let blobs = ResilientBlobStore::open(paths, settings);
    let degraded = settings.persist_attachments && blobs.is_degraded();
    let blobs: Arc<dyn BlobStore> = Arc::new(blobs);

    let sink: Box<dyn SubmissionSink> = if settings.save_submissions {
        Box::new(JsonFileSink::new(paths.submissions_dir()))
    } else {
        Box::new(LogSink)
    };

    let mut app = App::new(WizardStore::new(), blobs, sink);
    if degraded {
        app.notifications.push(Notification::warning(
            "Attachment storage unavailable; the logo is kept for this session only",
        ));
    }
    app
}

/// Run the TUI application
pub fn run_tui(paths: &OnboardPaths, settings: &Settings) -> Result<()> {
    let mut app = build_app(paths, settings);
    let mut terminal = init_terminal()?;
    let events = EventHandler::default();

    let result = (|| -> Result<()> {
        while !app.should_quit {
            terminal.draw(|frame| super::views::render(frame, &app))?;
            let event = events
                .next()
                .map_err(|_| OnboardError::Tui("terminal event reader stopped".into()))?;
            handle_event(&mut app, event);
        }
        Ok(())
    })();

    restore_terminal()?;

    if app.pending_write_count() > 0 {
        info!(count = app.pending_write_count(), "waiting for attachment writes");
    }
    app.finish_writes();

    result
}
