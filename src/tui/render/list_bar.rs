use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the list selector as a tab bar. Exactly one tab (the active
/// list) is highlighted; in Lists mode the selector cursor is underlined.
pub fn render_list_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut spans: Vec<Span> = Vec::new();

    if app.store.list_count() == 0 {
        spans.push(Span::styled(
            " no lists yet, press l then n to create one ",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    for (idx, list) in app.store.lists().enumerate() {
        let is_active = Some(list.id) == app.store.active();
        let is_picked = app.mode == Mode::Lists && idx == app.list_cursor;

        let mut style = if is_active {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        if is_picked {
            style = style
                .fg(app.theme.highlight)
                .add_modifier(Modifier::UNDERLINED);
        }

        spans.push(Span::styled(format!(" {} ", list.name), style));
        spans.push(Span::styled(" ", Style::default().bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::list::{ListId, TaskList};
    use crate::tui::render::test_helpers::{TERM_W, render_to_buffer, render_to_string, test_app};

    #[test]
    fn exactly_one_tab_carries_the_active_highlight() {
        let mut app = test_app();
        app.store.push_list(TaskList::new(ListId(1), "Home"));
        app.store.push_list(TaskList::new(ListId(2), "Work"));
        app.store.activate(ListId(2));

        let buf = render_to_buffer(TERM_W, 1, |frame, area| {
            render_list_bar(frame, &app, area);
        });
        let highlighted: String = buf
            .content
            .iter()
            .filter(|cell| cell.bg == app.theme.selection_bg)
            .map(|cell| cell.symbol())
            .collect();
        assert_eq!(highlighted, " Work ");
    }

    #[test]
    fn no_lists_shows_the_hint() {
        let app = test_app();
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_list_bar(frame, &app, area);
        });
        assert_eq!(output.trim(), "no lists yet, press l then n to create one");
    }
}
