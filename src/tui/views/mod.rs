//! TUI views
//!
//! The step form with its progress header, and the status bar.

pub mod status_bar;
pub mod step;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{toast_rect, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    step::render_header(frame, app, layout.header);
    step::render(frame, app, layout.body);
    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.notifications.current() {
        frame.render_widget(
            NotificationWidget::new(notification),
            toast_rect(layout.body),
        );
    }

    match &app.active_dialog {
        ActiveDialog::Submitted { company } => dialogs::submitted::render(frame, company),
        ActiveDialog::None => {}
    }
}
