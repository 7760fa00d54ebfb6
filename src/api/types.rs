use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::model::list::ListId;
use crate::model::task::TaskId;

/// Body of `POST /add-task`
#[derive(Debug, Clone, Serialize)]
pub struct AddTaskRequest {
    pub text: String,
    pub due_date: Option<String>,
    pub priority: Option<String>,
    pub list_id: ListId,
}

/// Body of `POST /update-task-text/{id}`
#[derive(Debug, Clone, Serialize)]
pub struct UpdateTextRequest {
    pub text: String,
}

/// Body of `POST /create-list`
#[derive(Debug, Clone, Serialize)]
pub struct CreateListRequest {
    pub name: String,
}

/// A task as returned by the server
#[derive(Debug, Clone, Deserialize)]
pub struct TaskRecord {
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub complete: bool,
    #[serde(default, deserialize_with = "lenient_date")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Option<String>,
}

/// A list as returned by `POST /create-list`
#[derive(Debug, Clone, Deserialize)]
pub struct ListRecord {
    pub id: ListId,
    pub name: String,
}

/// Response of `GET /get-tasks-for-list/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct TaskPage {
    pub tasks: Vec<TaskRecord>,
    /// Present on the live server; lets a list known only by id pick up
    /// its real name
    #[serde(default)]
    pub list_name: Option<String>,
}

/// Error body shared by all failure responses
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdatedText {
    pub new_text: String,
}

/// The server stores due dates as datetimes and emits them in ISO form
/// ("2024-05-01T00:00:00"), while requests and fixtures use plain
/// "2024-05-01". Accept both by parsing the leading calendar date.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) => {
            let date_part = s.get(..10).unwrap_or(s.as_str());
            NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
                .map(Some)
                .map_err(|_| serde::de::Error::custom(format!("invalid due_date: {:?}", s)))
        }
    }
}
