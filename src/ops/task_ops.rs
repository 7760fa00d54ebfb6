use tracing::warn;

use crate::api::types::AddTaskRequest;
use crate::api::Backend;
use crate::model::task::{SyncPhase, Task, TaskDraft, TaskId};
use crate::store::Store;

use super::OpError;

/// Result of committing an inline edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Server confirmed new text, store updated
    Updated,
    /// Trimmed text was empty or identical; no request was sent
    Unchanged,
}

// ---------------------------------------------------------------------------
// Task operations
// ---------------------------------------------------------------------------

/// Create a task in the active list.
///
/// Preconditions are checked before any request: non-empty trimmed text and
/// an active list. On success the server-returned record is prepended to
/// the view (newest-first); on failure the store is untouched.
pub fn add_task(
    store: &mut Store,
    backend: &dyn Backend,
    draft: &TaskDraft,
) -> Result<TaskId, OpError> {
    let text = draft.text.trim();
    if text.is_empty() {
        return Err(OpError::EmptyText);
    }
    let list_id = store.active().ok_or(OpError::NoActiveList)?;

    let req = AddTaskRequest {
        text: text.to_string(),
        due_date: normalize(draft.due_date.as_deref()),
        priority: normalize(draft.priority.as_deref()),
        list_id,
    };
    let record = backend.add_task(&req)?;

    let mut task = record_to_task(record);
    task.sync = SyncPhase::Committed;
    let id = task.id;
    store.insert_task_front(task);
    Ok(id)
}

/// Flip a task's completion flag.
///
/// Optimistic: the flag is flipped locally before the request goes out,
/// mirroring a checkbox that has already changed on screen. On failure the
/// flip is compensated and the error returned. Returns the settled value
/// of the flag.
pub fn toggle_task(store: &mut Store, backend: &dyn Backend, id: TaskId) -> Result<bool, OpError> {
    {
        let task = store.task_mut(id).ok_or(OpError::UnknownTask(id))?;
        task.complete = !task.complete;
        task.sync = SyncPhase::Pending;
    }

    match backend.toggle_task(id) {
        Ok(()) => {
            if let Some(task) = store.task_mut(id) {
                task.sync = SyncPhase::Committed;
            }
            Ok(store.task(id).map(|t| t.complete).unwrap_or(false))
        }
        Err(err) => {
            if let Some(task) = store.task_mut(id) {
                task.complete = !task.complete;
                task.sync = SyncPhase::RolledBack;
            }
            warn!(task = %id, error = %err, "toggle rolled back");
            Err(err.into())
        }
    }
}

/// Delete a task. The caller is responsible for interactive confirmation
/// before calling this. On success the task leaves the store; on failure
/// it stays.
pub fn delete_task(store: &mut Store, backend: &dyn Backend, id: TaskId) -> Result<(), OpError> {
    if store.task(id).is_none() {
        return Err(OpError::UnknownTask(id));
    }
    backend.delete_task(id)?;
    store.remove_task(id);
    Ok(())
}

/// Commit an inline edit of a task's text.
///
/// No request is sent when the trimmed text is empty or identical to the
/// current text. On success the server-confirmed text is installed; on
/// failure the stored text stays as it was (the edit field reverts by
/// re-rendering from the store). The caller leaves edit mode regardless.
pub fn update_task_text(
    store: &mut Store,
    backend: &dyn Backend,
    id: TaskId,
    new_text: &str,
) -> Result<EditOutcome, OpError> {
    let trimmed = new_text.trim();
    let current = store
        .task(id)
        .map(|t| t.text.clone())
        .ok_or(OpError::UnknownTask(id))?;
    if trimmed.is_empty() || trimmed == current {
        return Ok(EditOutcome::Unchanged);
    }

    let confirmed = backend.update_task_text(id, trimmed)?;
    if let Some(task) = store.task_mut(id) {
        task.text = confirmed;
        task.sync = SyncPhase::Committed;
    }
    Ok(EditOutcome::Updated)
}

/// Turn a wire record into a store task
pub fn record_to_task(record: crate::api::types::TaskRecord) -> Task {
    Task {
        id: record.id,
        text: record.text,
        due_date: record.due_date,
        priority: record.priority,
        complete: record.complete,
        sync: SyncPhase::Idle,
    }
}

/// Trim an optional field, dropping it entirely when blank
fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
