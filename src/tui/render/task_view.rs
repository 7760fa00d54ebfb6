use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::Task;
use crate::tui::app::{App, Mode};
use crate::tui::input::buffer::EditBuffer;
use crate::tui::theme::Theme;
use crate::util::unicode;

/// Shown when the active list has no tasks (and when no list is active yet)
pub const EMPTY_PLACEHOLDER: &str = "No tasks yet! Start by typing above.";

/// Render the task view: one row per task in view order, or the empty
/// placeholder. The store is the source of truth; this is a projection.
pub fn render_task_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    if app.store.is_view_empty() {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            EMPTY_PLACEHOLDER,
            Style::default().fg(app.theme.dim).bg(bg),
        )))
        .style(Style::default().bg(bg));
        frame.render_widget(paragraph, area);
        return;
    }

    // Stateless scroll: keep the cursor on screen, pinned to the bottom
    // edge when it runs past the viewport
    let height = area.height as usize;
    let offset = if height == 0 {
        0
    } else {
        app.cursor.saturating_sub(height - 1)
    };

    let mut lines: Vec<Line> = Vec::new();
    for (idx, task) in app.store.tasks().enumerate().skip(offset).take(height) {
        let selected = idx == app.cursor;
        let editing = match (&app.edit, app.mode) {
            (Some(edit), Mode::EditTask) if edit.task_id == task.id => Some(&edit.buffer),
            _ => None,
        };
        lines.push(task_row(
            &app.theme,
            task,
            selected,
            editing,
            area.width as usize,
        ));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// One task as a styled row: checkbox, text (or the live edit field), due
/// date, priority
fn task_row<'a>(
    theme: &Theme,
    task: &'a Task,
    selected: bool,
    editing: Option<&'a EditBuffer>,
    width: usize,
) -> Line<'a> {
    let bg = if selected {
        theme.selection_bg
    } else {
        theme.background
    };
    let base = Style::default().bg(bg);

    let mut spans: Vec<Span> = Vec::new();
    spans.push(Span::styled(
        checkbox(task.complete),
        base.fg(if task.complete {
            theme.green
        } else {
            theme.text
        }),
    ));
    spans.push(Span::styled(" ", base));

    match editing {
        Some(buffer) => {
            let (before, after) = buffer.split_at_cursor();
            spans.push(Span::styled(before, base.fg(theme.text_bright)));
            spans.push(Span::styled("\u{258C}", base.fg(theme.highlight)));
            spans.push(Span::styled(after, base.fg(theme.text_bright)));
        }
        None => {
            let text_width = width.saturating_sub(24).max(8);
            spans.push(Span::styled(
                unicode::truncate_to_width(&task.text, text_width),
                base.fg(theme.task_color(task.complete)),
            ));
        }
    }

    if let Some(date) = task.due_date_label() {
        spans.push(Span::styled(format!("  {}", date), base.fg(theme.cyan)));
    }
    if let Some(priority) = &task.priority {
        spans.push(Span::styled(
            format!("  !{}", priority),
            base.fg(theme.yellow),
        ));
    }

    Line::from(spans)
}

fn checkbox(complete: bool) -> &'static str {
    if complete { "[x]" } else { "[ ]" }
}
