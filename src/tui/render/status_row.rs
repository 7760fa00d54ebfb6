use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row: delete prompt, then flash, then mode hints
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let line = if app.mode == Mode::ConfirmDelete {
        let text = app
            .pending_delete
            .and_then(|id| app.store.task(id))
            .map(|t| t.text.as_str())
            .unwrap_or("task");
        Line::from(Span::styled(
            format!("Delete \"{}\"? (y/n)", text),
            Style::default().fg(app.theme.yellow).bg(bg),
        ))
    } else if let Some(flash) = &app.flash {
        let fg = if flash.is_error {
            app.theme.red
        } else {
            app.theme.green
        };
        Line::from(Span::styled(
            flash.text.clone(),
            Style::default().fg(fg).bg(bg),
        ))
    } else {
        Line::from(Span::styled(
            hints(app.mode),
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn hints(mode: Mode) -> &'static str {
    match mode {
        Mode::Navigate => "a add  enter edit  space toggle  d delete  l lists  r refresh  q quit",
        Mode::EditTask => "enter/esc save",
        Mode::Compose => "tab next field  enter add  esc back",
        Mode::Lists => "enter switch  n new list  esc back",
        Mode::NewList => "enter create  esc back",
        Mode::ConfirmDelete => "",
    }
}
