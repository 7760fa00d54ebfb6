use tracing::info;

use crate::api::Backend;
use crate::model::config::ClientConfig;
use crate::model::list::{ListId, TaskList};
use crate::store::Store;

use super::task_ops::record_to_task;
use super::OpError;

// ---------------------------------------------------------------------------
// List operations
// ---------------------------------------------------------------------------

/// Create a list and immediately switch the view to it.
///
/// An empty trimmed name is refused locally, no request sent. On success
/// the list joins the selector and becomes active; its (empty) task page is
/// fetched like any other switch.
pub fn create_list(store: &mut Store, backend: &dyn Backend, name: &str) -> Result<ListId, OpError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(OpError::EmptyListName);
    }

    let record = backend.create_list(name)?;
    info!(list = %record.id, "list created");
    store.push_list(TaskList::new(record.id, record.name));
    switch_list(store, backend, record.id)?;
    Ok(record.id)
}

/// Make a list active and repopulate the task view from the server.
///
/// The active id is set before the fetch; if the fetch fails the switch
/// stands but the previous page remains visible (the view is only
/// discarded once a replacement page has arrived).
pub fn switch_list(store: &mut Store, backend: &dyn Backend, id: ListId) -> Result<(), OpError> {
    if !store.activate(id) {
        return Err(OpError::UnknownList(id));
    }

    let page = backend.tasks_for_list(id)?;
    if let Some(name) = page.list_name {
        store.set_list_name(id, name);
    }
    store.replace_tasks(page.tasks.into_iter().map(record_to_task).collect());
    Ok(())
}

/// Seed the store from config and perform the startup switch.
///
/// The initial list id is the client-side analog of the value the server
/// injects into the page at load time: read once, then used for the first
/// fetch. Without one the session starts with no active list, and task
/// creation stays blocked until a list is chosen or created.
pub fn bootstrap(store: &mut Store, backend: &dyn Backend, config: &ClientConfig) -> Result<(), OpError> {
    for seed in &config.lists {
        store.push_list(TaskList::new(seed.id, seed.name.clone()));
    }
    match config.initial_list_id {
        Some(id) => {
            store.ensure_list(id);
            switch_list(store, backend, id)
        }
        None => Ok(()),
    }
}
