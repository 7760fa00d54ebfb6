use reqwest::blocking::{Client, Response};
use tracing::debug;

use crate::model::list::ListId;
use crate::model::task::TaskId;

use super::types::{
    AddTaskRequest, CreateListRequest, ErrorBody, ListRecord, TaskPage, TaskRecord,
    UpdateTextRequest, UpdatedText,
};
use super::{ApiError, Backend};

/// Blocking HTTP implementation of [`Backend`].
///
/// Calls block the calling thread until the response arrives, which
/// reproduces the run-to-completion model: one operation at a time, and
/// state is only touched after the response returns. No request timeout is
/// set; a hung request hangs the operation.
pub struct HttpBackend {
    base: String,
    client: Client,
}

impl HttpBackend {
    pub fn new(server_url: &str) -> Result<Self, ApiError> {
        let client = Client::builder().build()?;
        Ok(HttpBackend {
            base: server_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Pass 2xx responses through; turn anything else into the server's
    /// `{error}` message, falling back to the status line when the body is
    /// not the expected JSON.
    fn check(resp: Response) -> Result<Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = resp
            .json::<ErrorBody>()
            .map(|body| body.error)
            .unwrap_or_else(|_| format!("server returned {}", status));
        Err(ApiError::Server(message))
    }
}

impl Backend for HttpBackend {
    fn add_task(&self, req: &AddTaskRequest) -> Result<TaskRecord, ApiError> {
        debug!(list = %req.list_id, "POST /add-task");
        let resp = self.client.post(self.url("/add-task")).json(req).send()?;
        Ok(Self::check(resp)?.json()?)
    }

    fn toggle_task(&self, id: TaskId) -> Result<(), ApiError> {
        debug!(task = %id, "POST /toggle-task");
        let resp = self
            .client
            .post(self.url(&format!("/toggle-task/{}", id)))
            .send()?;
        // Success body carries {new_status}; the optimistic flip already
        // matches it, so it is ignored.
        Self::check(resp)?;
        Ok(())
    }

    fn delete_task(&self, id: TaskId) -> Result<(), ApiError> {
        debug!(task = %id, "POST /delete-task");
        let resp = self
            .client
            .post(self.url(&format!("/delete-task/{}", id)))
            .send()?;
        Self::check(resp)?;
        Ok(())
    }

    fn update_task_text(&self, id: TaskId, text: &str) -> Result<String, ApiError> {
        debug!(task = %id, "POST /update-task-text");
        let resp = self
            .client
            .post(self.url(&format!("/update-task-text/{}", id)))
            .json(&UpdateTextRequest {
                text: text.to_string(),
            })
            .send()?;
        let confirmed: UpdatedText = Self::check(resp)?.json()?;
        Ok(confirmed.new_text)
    }

    fn create_list(&self, name: &str) -> Result<ListRecord, ApiError> {
        debug!("POST /create-list");
        let resp = self
            .client
            .post(self.url("/create-list"))
            .json(&CreateListRequest {
                name: name.to_string(),
            })
            .send()?;
        Ok(Self::check(resp)?.json()?)
    }

    fn tasks_for_list(&self, id: ListId) -> Result<TaskPage, ApiError> {
        debug!(list = %id, "GET /get-tasks-for-list");
        let resp = self
            .client
            .get(self.url(&format!("/get-tasks-for-list/{}", id)))
            .send()?;
        Ok(Self::check(resp)?.json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let backend = HttpBackend::new("http://localhost:5000/").unwrap();
        assert_eq!(backend.url("/add-task"), "http://localhost:5000/add-task");
    }

    #[test]
    fn url_joins_id_paths() {
        let backend = HttpBackend::new("http://localhost:5000").unwrap();
        assert_eq!(
            backend.url(&format!("/toggle-task/{}", TaskId(42))),
            "http://localhost:5000/toggle-task/42"
        );
    }
}
