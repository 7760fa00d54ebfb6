use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::{list_ops, task_ops};
use crate::tui::app::{App, ComposeField, EditState, Mode};
use crate::tui::input::buffer::EditBuffer;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => {
            app.should_quit = true;
        }

        // Cursor movement
        (KeyModifiers::NONE, KeyCode::Char('j')) | (_, KeyCode::Down) => {
            if app.cursor + 1 < app.store.task_count() {
                app.cursor += 1;
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('k')) | (_, KeyCode::Up) => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Char('g')) | (_, KeyCode::Home) => {
            app.cursor = 0;
        }
        (_, KeyCode::Char('G')) | (_, KeyCode::End) => {
            app.cursor = app.store.task_count().saturating_sub(1);
        }

        // Toggle completion (optimistic, rolls back on failure)
        (KeyModifiers::NONE, KeyCode::Char(' ') | KeyCode::Char('x')) => {
            toggle_selected(app);
        }

        // Inline edit of the selected task
        (KeyModifiers::NONE, KeyCode::Char('e')) | (_, KeyCode::Enter) => {
            begin_edit(app);
        }

        // Compose a new task
        (KeyModifiers::NONE, KeyCode::Char('a') | KeyCode::Char('i')) => {
            app.compose.field = Some(ComposeField::Text);
            app.mode = Mode::Compose;
        }

        // Delete (after confirmation)
        (KeyModifiers::NONE, KeyCode::Char('d')) => {
            if let Some(id) = app.selected_task_id() {
                app.pending_delete = Some(id);
                app.mode = Mode::ConfirmDelete;
            }
        }

        // List selector
        (KeyModifiers::NONE, KeyCode::Char('l')) | (_, KeyCode::Tab) => {
            // Start from the active list's position
            app.list_cursor = app
                .store
                .lists()
                .position(|l| Some(l.id) == app.store.active())
                .unwrap_or(0);
            app.mode = Mode::Lists;
        }

        // Re-fetch the active list
        (KeyModifiers::NONE, KeyCode::Char('r')) => {
            refresh_active(app);
        }

        _ => {}
    }
}

fn toggle_selected(app: &mut App) {
    let Some(id) = app.selected_task_id() else {
        return;
    };
    if let Err(err) = task_ops::toggle_task(&mut app.store, app.backend.as_ref(), id) {
        app.flash_error(err.to_string());
    }
}

fn begin_edit(app: &mut App) {
    let Some(task) = app.store.task_at(app.cursor) else {
        return;
    };
    app.edit = Some(EditState {
        task_id: task.id,
        buffer: EditBuffer::with_text(&task.text),
    });
    app.mode = Mode::EditTask;
}

fn refresh_active(app: &mut App) {
    let Some(id) = app.store.active() else {
        return;
    };
    match list_ops::switch_list(&mut app.store, app.backend.as_ref(), id) {
        Ok(()) => app.clamp_cursor(),
        Err(err) => app.flash_error(err.to_string()),
    }
}
