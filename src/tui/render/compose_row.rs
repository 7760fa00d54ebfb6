use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, ComposeField, Mode};
use crate::tui::input::buffer::EditBuffer;
use crate::tui::theme::Theme;

/// Render the add-task row: three input fields while composing, a dim
/// hint otherwise
pub fn render_compose_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let line = if app.mode == Mode::Compose {
        let field = app.compose.field;
        let mut spans = vec![Span::styled(
            "\u{203A} ",
            Style::default().fg(app.theme.highlight).bg(bg),
        )];
        spans.extend(field_spans(
            &app.theme,
            &app.compose.text,
            field == Some(ComposeField::Text),
        ));
        spans.push(label(&app.theme, "  due: "));
        spans.extend(field_spans(
            &app.theme,
            &app.compose.due,
            field == Some(ComposeField::Due),
        ));
        spans.push(label(&app.theme, "  priority: "));
        spans.extend(field_spans(
            &app.theme,
            &app.compose.priority,
            field == Some(ComposeField::Priority),
        ));
        Line::from(spans)
    } else {
        Line::from(Span::styled(
            "\u{203A} press a to add a task",
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn label<'a>(theme: &Theme, text: &'a str) -> Span<'a> {
    Span::styled(text, Style::default().fg(theme.dim).bg(theme.background))
}

/// A field's text, with a block caret at the cursor when it has focus
fn field_spans<'a>(theme: &Theme, buffer: &'a EditBuffer, focused: bool) -> Vec<Span<'a>> {
    let bg = theme.background;
    let fg = if focused { theme.text_bright } else { theme.text };
    if !focused {
        return vec![Span::styled(buffer.text(), Style::default().fg(fg).bg(bg))];
    }
    let (before, after) = buffer.split_at_cursor();
    vec![
        Span::styled(before, Style::default().fg(fg).bg(bg)),
        Span::styled("\u{258C}", Style::default().fg(theme.highlight).bg(bg)),
        Span::styled(after, Style::default().fg(fg).bg(bg)),
    ]
}
