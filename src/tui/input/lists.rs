use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::list_ops;
use crate::tui::app::{App, Mode};

/// List selector: pick a list to switch to, or start creating one
pub(super) fn handle_lists(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('j')) | (_, KeyCode::Down) | (_, KeyCode::Right) => {
            if app.list_cursor + 1 < app.store.list_count() {
                app.list_cursor += 1;
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('k')) | (_, KeyCode::Up) | (_, KeyCode::Left) => {
            app.list_cursor = app.list_cursor.saturating_sub(1);
        }
        (_, KeyCode::Enter) => {
            switch_selected(app);
        }
        (KeyModifiers::NONE, KeyCode::Char('n')) => {
            app.new_list_input.clear();
            app.mode = Mode::NewList;
        }
        (_, KeyCode::Esc) | (KeyModifiers::NONE, KeyCode::Char('l')) => {
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}

/// Name entry for a new list
pub(super) fn handle_new_list(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            submit_new_list(app);
        }
        KeyCode::Esc => {
            app.mode = Mode::Lists;
        }
        KeyCode::Char(c) => app.new_list_input.insert(c),
        KeyCode::Backspace => app.new_list_input.backspace(),
        KeyCode::Left => app.new_list_input.left(),
        KeyCode::Right => app.new_list_input.right(),
        _ => {}
    }
}

fn switch_selected(app: &mut App) {
    let Some(id) = app.selected_list_id() else {
        return;
    };
    match list_ops::switch_list(&mut app.store, app.backend.as_ref(), id) {
        Ok(()) => {
            app.cursor = 0;
            app.mode = Mode::Navigate;
        }
        Err(err) => {
            // The switch may stand even when the fetch failed; stay in the
            // selector so the user sees where they are
            app.flash_error(err.to_string());
        }
    }
}

fn submit_new_list(app: &mut App) {
    let name = app.new_list_input.text().to_string();
    match list_ops::create_list(&mut app.store, app.backend.as_ref(), &name) {
        Ok(_) => {
            let created = app
                .store
                .active_list()
                .map(|l| l.name.clone())
                .unwrap_or_default();
            app.new_list_input.clear();
            app.cursor = 0;
            app.mode = Mode::Navigate;
            app.flash(format!("created \"{}\"", created));
        }
        Err(err) => {
            app.flash_error(err.to_string());
        }
    }
}
