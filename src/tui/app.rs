use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::api::{Backend, HttpBackend};
use crate::model::config::ClientConfig;
use crate::model::list::ListId;
use crate::model::task::TaskId;
use crate::ops::list_ops;
use crate::store::Store;

use super::input;
use super::input::buffer::EditBuffer;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving through the task view
    Navigate,
    /// Inline edit of the selected task's text
    EditTask,
    /// Entering a new task (text / due / priority fields)
    Compose,
    /// Picking a list from the selector
    Lists,
    /// Naming a new list
    NewList,
    /// y/n gate before a delete request goes out
    ConfirmDelete,
}

/// Inline edit session: at most one task is in edit mode at a time
#[derive(Debug)]
pub struct EditState {
    pub task_id: TaskId,
    pub buffer: EditBuffer,
}

/// Which compose field has the caret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeField {
    Text,
    Due,
    Priority,
}

/// Input state for the add-task row
#[derive(Debug, Default)]
pub struct ComposeState {
    pub text: EditBuffer,
    pub due: EditBuffer,
    pub priority: EditBuffer,
    pub field: Option<ComposeField>,
}

impl ComposeState {
    pub fn active_buffer_mut(&mut self) -> Option<&mut EditBuffer> {
        match self.field? {
            ComposeField::Text => Some(&mut self.text),
            ComposeField::Due => Some(&mut self.due),
            ComposeField::Priority => Some(&mut self.priority),
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.due.clear();
        self.priority.clear();
    }
}

/// Transient user-facing notification; swept once the deadline passes
#[derive(Debug, Clone)]
pub struct Flash {
    pub text: String,
    pub is_error: bool,
    pub deadline: Instant,
}

/// Main application state
pub struct App {
    pub store: Store,
    pub backend: Box<dyn Backend>,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Task view cursor (index into view order)
    pub cursor: usize,
    /// List selector cursor (Lists mode)
    pub list_cursor: usize,
    pub edit: Option<EditState>,
    pub compose: ComposeState,
    pub new_list_input: EditBuffer,
    /// Task awaiting delete confirmation
    pub pending_delete: Option<TaskId>,
    pub flash: Option<Flash>,
    flash_ttl: Duration,
}

impl App {
    pub fn new(store: Store, backend: Box<dyn Backend>, flash_secs: u64) -> Self {
        App {
            store,
            backend,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::default(),
            cursor: 0,
            list_cursor: 0,
            edit: None,
            compose: ComposeState::default(),
            new_list_input: EditBuffer::default(),
            pending_delete: None,
            flash: None,
            flash_ttl: Duration::from_secs(flash_secs),
        }
    }

    /// The task under the cursor, if any
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.store.task_at(self.cursor).map(|t| t.id)
    }

    /// The list under the selector cursor (Lists mode)
    pub fn selected_list_id(&self) -> Option<ListId> {
        self.store.lists().nth(self.list_cursor).map(|l| l.id)
    }

    pub fn clamp_cursor(&mut self) {
        let count = self.store.task_count();
        if count == 0 {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(count - 1);
        }
    }

    pub fn clamp_list_cursor(&mut self) {
        let count = self.store.list_count();
        if count == 0 {
            self.list_cursor = 0;
        } else {
            self.list_cursor = self.list_cursor.min(count - 1);
        }
    }

    pub fn flash(&mut self, text: impl Into<String>) {
        self.flash = Some(Flash {
            text: text.into(),
            is_error: false,
            deadline: Instant::now() + self.flash_ttl,
        });
    }

    /// Errors use the same auto-hiding mechanism as plain notices
    pub fn flash_error(&mut self, text: impl Into<String>) {
        self.flash = Some(Flash {
            text: text.into(),
            is_error: true,
            deadline: Instant::now() + self.flash_ttl,
        });
    }

    /// Sweep an expired flash (called every event-loop pass)
    pub fn tick(&mut self) {
        if let Some(flash) = &self.flash
            && Instant::now() >= flash.deadline
        {
            self.flash = None;
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point & event loop
// ---------------------------------------------------------------------------

pub fn run(config: ClientConfig) -> Result<(), Box<dyn std::error::Error>> {
    let backend = HttpBackend::new(&config.server_url)?;
    let mut app = App::new(Store::new(), Box::new(backend), config.flash_secs);

    // Startup switch to the configured initial list; a dead server should
    // still leave a usable UI, so failures become a flash instead of an exit.
    if let Err(err) = list_ops::bootstrap(&mut app.store, app.backend.as_ref(), &config) {
        app.flash_error(err.to_string());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        app.tick();

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::list::TaskList;
    use crate::model::task::Task;
    use crate::tui::render::test_helpers::{NullBackend, test_app};

    #[test]
    fn cursor_clamps_to_view() {
        let mut app = test_app();
        app.store.insert_task_front(Task::new(TaskId(1), "a"));
        app.cursor = 10;
        app.clamp_cursor();
        assert_eq!(app.cursor, 0);

        app.store.remove_task(TaskId(1));
        app.clamp_cursor();
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn selected_list_follows_selector_order() {
        let mut app = test_app();
        app.store.push_list(TaskList::new(ListId(1), "Home"));
        app.store.push_list(TaskList::new(ListId(2), "Work"));
        app.list_cursor = 1;
        assert_eq!(app.selected_list_id(), Some(ListId(2)));
    }

    #[test]
    fn flash_expires_on_tick() {
        let mut app = App::new(Store::new(), Box::new(NullBackend), 0);
        app.flash("saved");
        assert!(app.flash.is_some());
        app.tick();
        assert!(app.flash.is_none());
    }

    #[test]
    fn flash_survives_tick_before_deadline() {
        let mut app = test_app();
        app.flash_error("boom");
        app.tick();
        assert!(app.flash.is_some());
        assert!(app.flash.as_ref().unwrap().is_error);
    }
}
