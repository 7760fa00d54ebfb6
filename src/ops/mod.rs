pub mod list_ops;
pub mod task_ops;

use crate::api::ApiError;
use crate::model::list::ListId;
use crate::model::task::TaskId;

/// Error type for controller operations.
///
/// The first three are local precondition failures: they are reported
/// before any request is sent, and their messages match what the server
/// would have said for the same input.
#[derive(Debug, thiserror::Error)]
pub enum OpError {
    #[error("Task text cannot be empty.")]
    EmptyText,
    #[error("Please select or create a list before adding tasks.")]
    NoActiveList,
    #[error("Please enter a name for the new list.")]
    EmptyListName,
    #[error("task not found: {0}")]
    UnknownTask(TaskId),
    #[error("list not found: {0}")]
    UnknownList(ListId),
    #[error(transparent)]
    Api(#[from] ApiError),
}
