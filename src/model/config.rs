use serde::{Deserialize, Serialize};

use crate::model::list::ListId;

/// Client configuration (`taskdeck.toml`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the task server, e.g. "http://localhost:5000"
    pub server_url: String,
    /// List activated once at startup (the server-side analog injects this
    /// into the page at render time)
    #[serde(default)]
    pub initial_list_id: Option<ListId>,
    /// Known lists to seed the selector with; names are refreshed from the
    /// server on first switch
    #[serde(default)]
    pub lists: Vec<ListSeed>,
    /// Seconds a flash message stays visible
    #[serde(default = "default_flash_secs")]
    pub flash_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSeed {
    pub id: ListId,
    pub name: String,
}

fn default_flash_secs() -> u64 {
    3
}

impl ClientConfig {
    pub fn new(server_url: impl Into<String>) -> Self {
        ClientConfig {
            server_url: server_url.into(),
            initial_list_id: None,
            lists: Vec::new(),
            flash_secs: default_flash_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_parses_with_defaults() {
        let config: ClientConfig =
            toml::from_str("server_url = \"http://localhost:5000\"").unwrap();
        assert_eq!(config.server_url, "http://localhost:5000");
        assert!(config.initial_list_id.is_none());
        assert!(config.lists.is_empty());
        assert_eq!(config.flash_secs, 3);
    }

    #[test]
    fn full_config_parses() {
        let config: ClientConfig = toml::from_str(
            r#"server_url = "https://todo.example.com"
initial_list_id = 3
flash_secs = 5

[[lists]]
id = 3
name = "Errands"

[[lists]]
id = 8
name = "Work"
"#,
        )
        .unwrap();
        assert_eq!(config.initial_list_id, Some(ListId(3)));
        assert_eq!(config.lists.len(), 2);
        assert_eq!(config.lists[1].name, "Work");
        assert_eq!(config.flash_secs, 5);
    }
}
