use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::task_ops;
use crate::tui::app::{App, Mode};

/// Inline edit of a task's text.
///
/// Enter commits; Esc plays the blur role and also commits (the original
/// saves on focus loss, so there is no cancel path). Edit mode is always
/// left afterwards: success shows the confirmed text, failure re-renders
/// the stored text, which never changed.
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => {
            commit_edit(app);
        }
        KeyCode::Char(c) => {
            if let Some(edit) = &mut app.edit {
                edit.buffer.insert(c);
            }
        }
        KeyCode::Backspace => {
            if let Some(edit) = &mut app.edit {
                edit.buffer.backspace();
            }
        }
        KeyCode::Left => {
            if let Some(edit) = &mut app.edit {
                edit.buffer.left();
            }
        }
        KeyCode::Right => {
            if let Some(edit) = &mut app.edit {
                edit.buffer.right();
            }
        }
        KeyCode::Home => {
            if let Some(edit) = &mut app.edit {
                edit.buffer.home();
            }
        }
        KeyCode::End => {
            if let Some(edit) = &mut app.edit {
                edit.buffer.end();
            }
        }
        _ => {}
    }
}

fn commit_edit(app: &mut App) {
    let Some(edit) = app.edit.take() else {
        app.mode = Mode::Navigate;
        return;
    };

    let result = task_ops::update_task_text(
        &mut app.store,
        app.backend.as_ref(),
        edit.task_id,
        edit.buffer.text(),
    );
    if let Err(err) = result {
        app.flash_error(err.to_string());
    }
    app.mode = Mode::Navigate;
}
