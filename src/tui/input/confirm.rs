use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::task_ops;
use crate::tui::app::{App, Mode};

/// y/n gate before a delete request is sent
pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('y')) => {
            let pending = app.pending_delete.take();
            app.mode = Mode::Navigate;
            if let Some(id) = pending
                && let Err(err) = task_ops::delete_task(&mut app.store, app.backend.as_ref(), id)
            {
                app.flash_error(err.to_string());
            }
            app.clamp_cursor();
        }
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => {
            app.pending_delete = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}
