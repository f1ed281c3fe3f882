//! Status bar view
//!
//! Shows pending attachment writes and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;
use crate::wizard::Step;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.shell.step()),
        Style::default().fg(Color::Cyan),
    )];

    let pending = app.pending_write_count();
    if pending > 0 {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("saving {} attachment(s)", pending),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = match app.shell.step() {
        Step::Company => " Enter:Next  Tab:Field  ←/→:Choose  Space:Toggle  Ctrl-Q:Quit ",
        Step::Address => " Enter:Next  Esc:Previous  Tab:Field  ←/→:Choose  Ctrl-Q:Quit ",
        Step::Services => " Enter:Submit  Esc:Previous  Tab:Field  Space:Toggle  Ctrl-Q:Quit ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
