//! Step form view
//!
//! Renders the mounted step as a column of labelled fields with inline
//! errors under each invalid field.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::tui::app::App;
use crate::tui::form::{FieldKind, FieldView};
use crate::wizard::Step;

const LABEL_WIDTH: u16 = 30;

/// Render the step progress header
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let current = app.shell.step();
    let titles: Vec<Line> = Step::ALL
        .iter()
        .map(|step| Line::from(format!("{}. {}", step.index(), step.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(usize::from(current.index() - 1))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Company Onboarding "),
        )
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

/// Render the mounted step's fields
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", app.shell.step()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = app.form().fields();
    let mut y = inner.y;
    let bottom = inner.y + inner.height;

    for (index, field) in fields.iter().enumerate() {
        if y >= bottom {
            break;
        }
        let focused = index == app.focus;
        let row = Rect::new(inner.x, y, inner.width, 1);
        render_field(frame, app, field, focused, row);
        y += 1;

        if let Some(error) = &field.error {
            if y < bottom {
                let line = Line::from(Span::styled(
                    format!("{:width$}{}", "", error, width = LABEL_WIDTH as usize),
                    Style::default().fg(Color::Red),
                ));
                frame.render_widget(Paragraph::new(line), Rect::new(inner.x, y, inner.width, 1));
                y += 1;
            }
        }
    }
}

fn render_field(frame: &mut Frame, app: &App, field: &FieldView, focused: bool, row: Rect) {
    let marker = if field.required { " *" } else { "" };
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else if field.error.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let label = Paragraph::new(Line::from(Span::styled(
        format!("{}{}", field.label, marker),
        label_style,
    )));
    let label_width = LABEL_WIDTH.min(row.width);
    frame.render_widget(label, Rect::new(row.x, row.y, label_width, 1));

    let value_area = Rect::new(
        row.x + label_width,
        row.y,
        row.width.saturating_sub(label_width),
        1,
    );

    if focused && field.kind.is_textual() {
        frame.render_widget(&app.editor, value_area);
        return;
    }

    let value = match field.kind {
        FieldKind::Select if field.value.is_empty() => "< select >".to_string(),
        FieldKind::Select if focused => format!("< {} >", field.value),
        FieldKind::File if field.value.is_empty() => "(no file)".to_string(),
        _ => field.value.clone(),
    };
    let value_style = if focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(value, value_style))),
        value_area,
    );
}
