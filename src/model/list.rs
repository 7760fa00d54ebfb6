use serde::{Deserialize, Serialize};

/// Server-assigned list identifier, opaque to the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(pub i64);

impl std::fmt::Display for ListId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named collection of tasks. Lists are created on the server and never
/// edited or deleted by this client; only which one is active changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskList {
    pub id: ListId,
    pub name: String,
}

impl TaskList {
    pub fn new(id: ListId, name: impl Into<String>) -> Self {
        TaskList {
            id,
            name: name.into(),
        }
    }

    /// Stand-in for a list known only by its identifier (e.g. the
    /// configured initial list before its first fetch). The real name
    /// replaces this on the first successful task fetch.
    pub fn unnamed(id: ListId) -> Self {
        TaskList {
            id,
            name: format!("list {}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unnamed_uses_id_as_placeholder() {
        let list = TaskList::unnamed(ListId(7));
        assert_eq!(list.name, "list 7");
    }
}
