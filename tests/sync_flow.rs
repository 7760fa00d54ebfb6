//! End-to-end controller flows over a scripted backend.
//!
//! Each test drives the real ops and store exactly as the TUI/CLI would,
//! with the HTTP layer replaced by a programmable double, and checks the
//! view the renderer would project.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use pretty_assertions::assert_eq;

use taskdeck::api::types::{AddTaskRequest, ListRecord, TaskPage, TaskRecord};
use taskdeck::api::{ApiError, Backend};
use taskdeck::model::config::ClientConfig;
use taskdeck::model::list::{ListId, TaskList};
use taskdeck::model::task::{TaskDraft, TaskId};
use taskdeck::ops::{list_ops, task_ops};
use taskdeck::store::Store;

/// Programmable backend double: serves canned pages, assigns ids, can be
/// told to fail specific operations, and records every call it receives.
#[derive(Default)]
struct ScriptedBackend {
    next_task_id: Cell<i64>,
    next_list_id: Cell<i64>,
    pages: RefCell<HashMap<i64, TaskPage>>,
    failing_ops: RefCell<Vec<&'static str>>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedBackend {
    fn new() -> Self {
        let backend = ScriptedBackend::default();
        backend.next_task_id.set(42);
        backend.next_list_id.set(7);
        backend
    }

    fn serve_page(&self, list: i64, page: TaskPage) {
        self.pages.borrow_mut().insert(list, page);
    }

    fn fail(&self, op: &'static str) {
        self.failing_ops.borrow_mut().push(op);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn gate(&self, op: &'static str, call: String) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        if self.failing_ops.borrow().contains(&op) {
            Err(ApiError::Server(format!("{} refused", op)))
        } else {
            Ok(())
        }
    }
}

impl Backend for ScriptedBackend {
    fn add_task(&self, req: &AddTaskRequest) -> Result<TaskRecord, ApiError> {
        self.gate("add", format!("add:{}", req.text))?;
        let id = self.next_task_id.get();
        self.next_task_id.set(id + 1);
        Ok(TaskRecord {
            id: TaskId(id),
            text: req.text.clone(),
            complete: false,
            due_date: req
                .due_date
                .as_deref()
                .and_then(|d| chrono::NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()),
            priority: req.priority.clone(),
        })
    }

    fn toggle_task(&self, id: TaskId) -> Result<(), ApiError> {
        self.gate("toggle", format!("toggle:{}", id))
    }

    fn delete_task(&self, id: TaskId) -> Result<(), ApiError> {
        self.gate("delete", format!("delete:{}", id))
    }

    fn update_task_text(&self, id: TaskId, text: &str) -> Result<String, ApiError> {
        self.gate("update", format!("update:{}:{}", id, text))?;
        Ok(text.trim().to_string())
    }

    fn create_list(&self, name: &str) -> Result<ListRecord, ApiError> {
        self.gate("create-list", format!("create-list:{}", name))?;
        let id = self.next_list_id.get();
        self.next_list_id.set(id + 1);
        Ok(ListRecord {
            id: ListId(id),
            name: name.to_string(),
        })
    }

    fn tasks_for_list(&self, id: ListId) -> Result<TaskPage, ApiError> {
        self.gate("fetch", format!("fetch:{}", id))?;
        Ok(self
            .pages
            .borrow()
            .get(&id.0)
            .cloned()
            .unwrap_or(TaskPage {
                tasks: Vec::new(),
                list_name: None,
            }))
    }
}

fn record(id: i64, text: &str) -> TaskRecord {
    TaskRecord {
        id: TaskId(id),
        text: text.to_string(),
        complete: false,
        due_date: None,
        priority: None,
    }
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn create_list_then_view_is_empty_and_active() {
    let backend = ScriptedBackend::new();
    let mut store = Store::new();

    let id = list_ops::create_list(&mut store, &backend, "Groceries").unwrap();
    assert_eq!(id, ListId(7));
    assert_eq!(store.active(), Some(ListId(7)));
    assert_eq!(
        store.active_list().map(|l| l.name.as_str()),
        Some("Groceries")
    );
    // Empty view: the renderer projects the placeholder from this
    assert!(store.is_view_empty());
}

#[test]
fn add_task_with_due_date_lands_first_with_server_fields() {
    let backend = ScriptedBackend::new();
    let mut store = Store::new();
    list_ops::create_list(&mut store, &backend, "Groceries").unwrap();

    let draft = TaskDraft {
        text: "Buy milk".into(),
        due_date: Some("2024-05-01".into()),
        priority: None,
    };
    let id = task_ops::add_task(&mut store, &backend, &draft).unwrap();
    assert_eq!(id, TaskId(42));

    let first = store.task_at(0).unwrap();
    assert_eq!(first.id, TaskId(42));
    assert_eq!(first.text, "Buy milk");
    assert_eq!(first.due_date_label().as_deref(), Some("2024-05-01"));
}

#[test]
fn new_tasks_stack_newest_first() {
    let backend = ScriptedBackend::new();
    let mut store = Store::new();
    list_ops::create_list(&mut store, &backend, "Groceries").unwrap();

    task_ops::add_task(&mut store, &backend, &TaskDraft::new("first")).unwrap();
    task_ops::add_task(&mut store, &backend, &TaskDraft::new("second")).unwrap();

    let texts: Vec<_> = store.tasks().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["second", "first"]);
}

#[test]
fn add_without_active_list_is_blocked_locally() {
    let backend = ScriptedBackend::new();
    let mut store = Store::new();

    let err = task_ops::add_task(&mut store, &backend, &TaskDraft::new("orphan")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Please select or create a list before adding tasks."
    );
    assert!(backend.calls().is_empty(), "no request may be sent");
}

#[test]
fn failed_toggle_restores_pre_toggle_state() {
    let backend = ScriptedBackend::new();
    let mut store = Store::new();
    list_ops::create_list(&mut store, &backend, "Groceries").unwrap();
    let id = task_ops::add_task(&mut store, &backend, &TaskDraft::new("Buy milk")).unwrap();

    backend.fail("toggle");
    let err = task_ops::toggle_task(&mut store, &backend, id).unwrap_err();
    assert_eq!(err.to_string(), "toggle refused");
    assert!(
        !store.task(id).unwrap().complete,
        "completion must equal its pre-toggle value"
    );

    // And a successful retry settles it
    backend.failing_ops.borrow_mut().clear();
    assert!(task_ops::toggle_task(&mut store, &backend, id).unwrap());
    assert!(store.task(id).unwrap().complete);
}

#[test]
fn deleting_last_task_empties_view_others_untouched() {
    let backend = ScriptedBackend::new();
    let mut store = Store::new();
    list_ops::create_list(&mut store, &backend, "Groceries").unwrap();
    let a = task_ops::add_task(&mut store, &backend, &TaskDraft::new("a")).unwrap();
    let b = task_ops::add_task(&mut store, &backend, &TaskDraft::new("b")).unwrap();

    // Non-last delete leaves the sibling alone
    task_ops::delete_task(&mut store, &backend, b).unwrap();
    assert_eq!(store.task_count(), 1);
    assert_eq!(store.task_at(0).unwrap().text, "a");

    // Last delete empties the view (placeholder territory)
    task_ops::delete_task(&mut store, &backend, a).unwrap();
    assert!(store.is_view_empty());
}

#[test]
fn identical_or_empty_edit_sends_no_request() {
    let backend = ScriptedBackend::new();
    let mut store = Store::new();
    list_ops::create_list(&mut store, &backend, "Groceries").unwrap();
    let id = task_ops::add_task(&mut store, &backend, &TaskDraft::new("Buy milk")).unwrap();
    let calls_before = backend.calls().len();

    let outcome = task_ops::update_task_text(&mut store, &backend, id, "Buy milk").unwrap();
    assert_eq!(outcome, task_ops::EditOutcome::Unchanged);
    let outcome = task_ops::update_task_text(&mut store, &backend, id, "   ").unwrap();
    assert_eq!(outcome, task_ops::EditOutcome::Unchanged);

    assert_eq!(backend.calls().len(), calls_before);
    assert_eq!(store.task(id).unwrap().text, "Buy milk");
}

#[test]
fn switching_lists_keeps_exactly_one_active() {
    let backend = ScriptedBackend::new();
    backend.serve_page(
        1,
        TaskPage {
            tasks: vec![record(10, "home chore")],
            list_name: Some("Home".into()),
        },
    );
    backend.serve_page(
        2,
        TaskPage {
            tasks: vec![record(20, "work item"), record(21, "another")],
            list_name: Some("Work".into()),
        },
    );

    let mut store = Store::new();
    store.push_list(TaskList::new(ListId(1), "Home"));
    store.push_list(TaskList::new(ListId(2), "Work"));

    list_ops::switch_list(&mut store, &backend, ListId(1)).unwrap();
    assert_eq!(store.active(), Some(ListId(1)));
    assert_eq!(store.task_count(), 1);

    list_ops::switch_list(&mut store, &backend, ListId(2)).unwrap();
    assert_eq!(store.active(), Some(ListId(2)));
    // Wholesale replacement, backend order preserved
    let ids: Vec<_> = store.tasks().map(|t| t.id).collect();
    assert_eq!(ids, vec![TaskId(20), TaskId(21)]);

    // Exactly one active: the store holds a single active id, and it names
    // a known list
    let active = store.active().unwrap();
    assert_eq!(store.lists().filter(|l| l.id == active).count(), 1);
}

#[test]
fn bootstrap_learns_real_name_of_configured_list() {
    let backend = ScriptedBackend::new();
    backend.serve_page(
        3,
        TaskPage {
            tasks: vec![record(1, "carried over")],
            list_name: Some("Errands".into()),
        },
    );

    let mut config = ClientConfig::new("http://localhost:5000");
    config.initial_list_id = Some(ListId(3));

    let mut store = Store::new();
    list_ops::bootstrap(&mut store, &backend, &config).unwrap();

    assert_eq!(store.active(), Some(ListId(3)));
    assert_eq!(store.active_list().map(|l| l.name.as_str()), Some("Errands"));
    assert_eq!(store.task_count(), 1);
}

#[test]
fn full_session_flow() {
    let backend = ScriptedBackend::new();
    let mut store = Store::new();

    // Create a list, fill it, work it down
    list_ops::create_list(&mut store, &backend, "Groceries").unwrap();
    let milk = task_ops::add_task(&mut store, &backend, &TaskDraft::new("Buy milk")).unwrap();
    let bread = task_ops::add_task(&mut store, &backend, &TaskDraft::new("Buy bread")).unwrap();

    assert!(task_ops::toggle_task(&mut store, &backend, milk).unwrap());

    let outcome =
        task_ops::update_task_text(&mut store, &backend, bread, "Buy rye bread").unwrap();
    assert_eq!(outcome, task_ops::EditOutcome::Updated);
    assert_eq!(store.task(bread).unwrap().text, "Buy rye bread");

    task_ops::delete_task(&mut store, &backend, milk).unwrap();
    assert_eq!(store.task_count(), 1);

    assert_eq!(
        backend.calls(),
        vec![
            "create-list:Groceries",
            "fetch:7",
            "add:Buy milk",
            "add:Buy bread",
            "toggle:42",
            "update:43:Buy rye bread",
            "delete:42",
        ]
    );
}
