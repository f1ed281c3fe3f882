//! Event handler for the TUI
//!
//! Routes key events to the dialog, the wizard navigation keys, or the
//! focused field.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;
use super::event::Event;
use super::form::FieldKind;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => app.tick(),
        Event::Resize(_, _) => {}
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        app.quit();
        return;
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Enter => app.submit_step(),
        KeyCode::Esc => app.previous_step(),
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        _ => handle_field_key(app, key),
    }
}

/// The submission dialog blocks everything until acknowledged
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        app.close_dialog();
    }
}

fn handle_field_key(app: &mut App, key: KeyEvent) {
    let focus = app.focus;
    match app.focused_kind() {
        Some(FieldKind::Select) => match key.code {
            KeyCode::Right | KeyCode::Char(' ') => app.form_mut().cycle(focus, true),
            KeyCode::Left => app.form_mut().cycle(focus, false),
            _ => {}
        },
        Some(FieldKind::Toggle) => {
            if key.code == KeyCode::Char(' ') {
                app.form_mut().toggle(focus);
            }
        }
        Some(kind) if kind.is_textual() => {
            let edited = match key.code {
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.editor.insert(c);
                    true
                }
                KeyCode::Backspace => {
                    app.editor.backspace();
                    true
                }
                KeyCode::Delete => {
                    app.editor.delete();
                    true
                }
                KeyCode::Left => {
                    app.editor.move_left();
                    false
                }
                KeyCode::Right => {
                    app.editor.move_right();
                    false
                }
                KeyCode::Home => {
                    app.editor.move_start();
                    false
                }
                KeyCode::End => {
                    app.editor.move_end();
                    false
                }
                _ => false,
            };
            if edited {
                app.commit_editor();
            }
        }
        _ => {}
    }
}
