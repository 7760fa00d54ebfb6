use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::ClientConfig;

pub const CONFIG_FILE: &str = "taskdeck.toml";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no {CONFIG_FILE} found (looked in the working directory); pass --config or --server")]
    NotFound,
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {CONFIG_FILE}: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Read the config from an explicit path
pub fn read_config(path: &Path) -> Result<ClientConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(toml::from_str(&text)?)
}

/// Resolve the config: an explicit `--config` path wins, otherwise
/// `taskdeck.toml` in the working directory.
pub fn load_config(explicit: Option<&Path>) -> Result<ClientConfig, ConfigError> {
    match explicit {
        Some(path) => read_config(path),
        None => {
            let path = PathBuf::from(CONFIG_FILE);
            if !path.exists() {
                return Err(ConfigError::NotFound);
            }
            read_config(&path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_config_parses_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "server_url = \"http://localhost:5000\"\ninitial_list_id = 2\n",
        )
        .unwrap();

        let config = read_config(&path).unwrap();
        assert_eq!(config.server_url, "http://localhost:5000");
        assert_eq!(config.initial_list_id.map(|id| id.0), Some(2));
    }

    #[test]
    fn read_config_missing_file_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let err = read_config(&tmp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn read_config_bad_toml_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(&path, "server_url = [not toml").unwrap();
        let err = read_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn explicit_path_wins() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("elsewhere.toml");
        fs::write(&path, "server_url = \"http://example.com\"\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.server_url, "http://example.com");
    }
}
