mod compose_row;
mod list_bar;
mod status_row;
mod task_view;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use super::app::App;

/// Render the whole screen: list tabs, add-task row, task view, status row
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(frame.area());

    list_bar::render_list_bar(frame, app, chunks[0]);
    compose_row::render_compose_row(frame, app, chunks[1]);
    task_view::render_task_view(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);
}
