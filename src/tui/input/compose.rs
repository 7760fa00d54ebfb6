use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::task::TaskDraft;
use crate::ops::task_ops;
use crate::tui::app::{App, ComposeField, Mode};

/// Add-task entry: three fields (text, due date, priority), Tab cycling
/// between them, Enter submitting from any field.
pub(super) fn handle_compose(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Enter) => {
            submit(app);
        }
        (_, KeyCode::Esc) => {
            // Drafts are kept; reopening compose resumes where it left off
            app.compose.field = None;
            app.mode = Mode::Navigate;
        }
        (KeyModifiers::NONE, KeyCode::Tab) | (_, KeyCode::Down) => {
            app.compose.field = Some(match app.compose.field {
                Some(ComposeField::Text) => ComposeField::Due,
                Some(ComposeField::Due) => ComposeField::Priority,
                _ => ComposeField::Text,
            });
        }
        (_, KeyCode::BackTab) | (_, KeyCode::Up) => {
            app.compose.field = Some(match app.compose.field {
                Some(ComposeField::Priority) => ComposeField::Due,
                Some(ComposeField::Due) => ComposeField::Text,
                _ => ComposeField::Priority,
            });
        }
        (_, KeyCode::Char(c)) => {
            if let Some(buffer) = app.compose.active_buffer_mut() {
                buffer.insert(c);
            }
        }
        (_, KeyCode::Backspace) => {
            if let Some(buffer) = app.compose.active_buffer_mut() {
                buffer.backspace();
            }
        }
        (_, KeyCode::Left) => {
            if let Some(buffer) = app.compose.active_buffer_mut() {
                buffer.left();
            }
        }
        (_, KeyCode::Right) => {
            if let Some(buffer) = app.compose.active_buffer_mut() {
                buffer.right();
            }
        }
        _ => {}
    }
}

fn submit(app: &mut App) {
    let draft = TaskDraft {
        text: app.compose.text.text().to_string(),
        due_date: Some(app.compose.due.text().to_string()),
        priority: Some(app.compose.priority.text().to_string()),
    };

    match task_ops::add_task(&mut app.store, app.backend.as_ref(), &draft) {
        Ok(_) => {
            // New task sits at the top; follow it with the cursor
            app.compose.clear();
            app.compose.field = None;
            app.cursor = 0;
            app.mode = Mode::Navigate;
        }
        Err(err) => {
            // Precondition and server failures alike: surface, keep the
            // draft so nothing typed is lost
            app.flash_error(err.to_string());
        }
    }
}
