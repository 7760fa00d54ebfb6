use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::api::types::{AddTaskRequest, ListRecord, TaskPage, TaskRecord};
use crate::api::{ApiError, Backend};
use crate::model::list::ListId;
use crate::model::task::TaskId;
use crate::store::Store;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Backend that refuses everything; render and app-state tests never
/// reach it.
pub struct NullBackend;

impl Backend for NullBackend {
    fn add_task(&self, _req: &AddTaskRequest) -> Result<TaskRecord, ApiError> {
        Err(ApiError::Server("unreachable".into()))
    }
    fn toggle_task(&self, _id: TaskId) -> Result<(), ApiError> {
        Err(ApiError::Server("unreachable".into()))
    }
    fn delete_task(&self, _id: TaskId) -> Result<(), ApiError> {
        Err(ApiError::Server("unreachable".into()))
    }
    fn update_task_text(&self, _id: TaskId, _text: &str) -> Result<String, ApiError> {
        Err(ApiError::Server("unreachable".into()))
    }
    fn create_list(&self, _name: &str) -> Result<ListRecord, ApiError> {
        Err(ApiError::Server("unreachable".into()))
    }
    fn tasks_for_list(&self, _id: ListId) -> Result<TaskPage, ApiError> {
        Err(ApiError::Server("unreachable".into()))
    }
}

/// An App with an empty store, never talking to a server
pub fn test_app() -> App {
    App::new(Store::new(), Box::new(NullBackend), 3)
}

/// Render into an in-memory buffer and return the styled cell grid
pub fn render_to_buffer<F>(w: u16, h: u16, f: F) -> Buffer
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let buf = render_to_buffer(w, h, f);
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}
