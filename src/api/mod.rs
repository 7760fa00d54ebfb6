pub mod client;
pub mod types;

pub use client::HttpBackend;
pub use types::*;

use crate::model::list::ListId;
use crate::model::task::TaskId;

/// Error type for backend calls.
///
/// `Transport` is a request that failed before producing a response
/// (unreachable server, connection reset); `Server` is a well-formed error
/// response whose message is surfaced to the user verbatim. Neither is
/// retried.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error. {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{0}")]
    Server(String),
}

/// The seam between controllers and HTTP. One method per server operation;
/// implementations must not retry or reorder calls.
pub trait Backend {
    fn add_task(&self, req: &AddTaskRequest) -> Result<TaskRecord, ApiError>;
    fn toggle_task(&self, id: TaskId) -> Result<(), ApiError>;
    fn delete_task(&self, id: TaskId) -> Result<(), ApiError>;
    /// Returns the server-confirmed text
    fn update_task_text(&self, id: TaskId, text: &str) -> Result<String, ApiError>;
    fn create_list(&self, name: &str) -> Result<ListRecord, ApiError>;
    fn tasks_for_list(&self, id: ListId) -> Result<TaskPage, ApiError>;
}
