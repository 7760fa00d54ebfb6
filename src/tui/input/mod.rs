pub mod buffer;
mod compose;
mod confirm;
mod edit;
mod lists;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    match app.mode {
        Mode::Navigate => navigate::handle_navigate(app, key),
        Mode::EditTask => edit::handle_edit(app, key),
        Mode::Compose => compose::handle_compose(app, key),
        Mode::Lists => lists::handle_lists(app, key),
        Mode::NewList => lists::handle_new_list(app, key),
        Mode::ConfirmDelete => confirm::handle_confirm(app, key),
    }
}
