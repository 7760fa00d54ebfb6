//! In-memory source of truth for the client.
//!
//! The store holds the known lists (selector order), the active list's
//! tasks (view order), and the active list identifier. Rendering is a
//! derived projection of this state; nothing renders what the store does
//! not hold. A list switch replaces the task page wholesale.

use indexmap::IndexMap;

use crate::model::list::{ListId, TaskList};
use crate::model::task::{Task, TaskId};

#[derive(Debug, Default)]
pub struct Store {
    /// Known lists in selector order
    lists: IndexMap<ListId, TaskList>,
    /// Tasks of the active list in view order (index 0 renders first)
    tasks: IndexMap<TaskId, Task>,
    /// At most one active list; always present in `lists`
    active: Option<ListId>,
}

impl Store {
    pub fn new() -> Self {
        Store::default()
    }

    // --- lists & session state ---

    pub fn lists(&self) -> impl Iterator<Item = &TaskList> {
        self.lists.values()
    }

    pub fn list_count(&self) -> usize {
        self.lists.len()
    }

    /// Append a list to the selector order, or refresh its name if already
    /// known.
    pub fn push_list(&mut self, list: TaskList) {
        match self.lists.get_mut(&list.id) {
            Some(existing) => existing.name = list.name,
            None => {
                self.lists.insert(list.id, list);
            }
        }
    }

    /// Make sure a list id has a selector entry, inserting a placeholder
    /// name when the list is known only by id.
    pub fn ensure_list(&mut self, id: ListId) {
        if !self.lists.contains_key(&id) {
            self.lists.insert(id, TaskList::unnamed(id));
        }
    }

    pub fn set_list_name(&mut self, id: ListId, name: String) {
        if let Some(list) = self.lists.get_mut(&id) {
            list.name = name;
        }
    }

    pub fn active(&self) -> Option<ListId> {
        self.active
    }

    /// The active list's record, when one is active
    pub fn active_list(&self) -> Option<&TaskList> {
        self.active.and_then(|id| self.lists.get(&id))
    }

    /// Set the active list. Returns false (and changes nothing) if the id
    /// has no selector entry, preserving the invariant that the active id
    /// always names a known list.
    pub fn activate(&mut self, id: ListId) -> bool {
        if self.lists.contains_key(&id) {
            self.active = Some(id);
            true
        } else {
            false
        }
    }

    // --- tasks (view order) ---

    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_view_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    pub fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.get_mut(&id)
    }

    /// Task at a view-order position (what a cursor points at)
    pub fn task_at(&self, index: usize) -> Option<&Task> {
        self.tasks.get_index(index).map(|(_, task)| task)
    }

    /// Insert a newly created task at the front of the view (newest-first)
    pub fn insert_task_front(&mut self, task: Task) {
        self.tasks.shift_insert(0, task.id, task);
    }

    /// Replace the task page wholesale, keeping the order given (the
    /// backend's order is used as-is, no re-sorting)
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks.into_iter().map(|t| (t.id, t)).collect();
    }

    pub fn remove_task(&mut self, id: TaskId) -> Option<Task> {
        self.tasks.shift_remove(&id)
    }
}
