use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Server-assigned task identifier, opaque to the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Phase of the most recent local mutation of a task.
///
/// Mutations are two-phase: an optimistic local apply while the request is
/// in flight (`Pending`), then either the server confirms (`Committed`) or
/// the local change is compensated (`RolledBack`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncPhase {
    #[default]
    Idle,
    /// Local change applied, request in flight
    Pending,
    Committed,
    RolledBack,
}

/// A to-do item as known to the client store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    /// Display text (non-empty, server-trimmed)
    pub text: String,
    pub due_date: Option<NaiveDate>,
    /// Short free-form label like "high"
    pub priority: Option<String>,
    pub complete: bool,
    /// Not part of the wire format
    pub sync: SyncPhase,
}

impl Task {
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Task {
            id,
            text: text.into(),
            due_date: None,
            priority: None,
            complete: false,
            sync: SyncPhase::Idle,
        }
    }

    /// Due date formatted as zero-padded `YYYY-MM-DD`
    pub fn due_date_label(&self) -> Option<String> {
        self.due_date.map(|d| d.format("%Y-%m-%d").to_string())
    }
}

/// Unsubmitted task input captured from the compose fields.
///
/// The due date is kept as the raw string the user typed; the server
/// validates the format and its error is surfaced verbatim.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub text: String,
    pub due_date: Option<String>,
    pub priority: Option<String>,
}

impl TaskDraft {
    pub fn new(text: impl Into<String>) -> Self {
        TaskDraft {
            text: text.into(),
            due_date: None,
            priority: None,
        }
    }
}
