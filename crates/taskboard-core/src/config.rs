use crate::{TaskboardError, TaskboardResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Name of the file holding the `x-auth` credential between runs.
const CREDENTIAL_FILE_NAME: &str = "x-auth";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_server_url")]
    pub server_url: String,
    #[serde(default)]
    pub credential_file: Option<PathBuf>,
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            credential_file: None,
        }
    }
}

impl ClientConfig {
    pub fn config_dir() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/taskboard"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("taskboard"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("taskboard"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Load the user's config file, falling back to defaults when it is
    /// missing or unreadable.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                match Self::load_from(&config_path) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Ignoring config at {}: {}", config_path.display(), e);
                    }
                }
            }
        }
        Self::default()
    }

    pub fn load_from(path: &Path) -> TaskboardResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| TaskboardError::Config(e.to_string()))
    }

    /// Where the credential lives: the configured file, or `x-auth` next to
    /// the config file.
    pub fn effective_credential_file(&self) -> Option<PathBuf> {
        self.credential_file
            .clone()
            .or_else(|| Self::config_dir().map(|dir| dir.join(CREDENTIAL_FILE_NAME)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"
server_url = "https://boards.example.com"
credential_file = "/tmp/taskboard-token"
"#,
        )
        .unwrap();
        file.flush().unwrap();

        let config = ClientConfig::load_from(file.path()).unwrap();
        assert_eq!(config.server_url, "https://boards.example.com");
        assert_eq!(
            config.effective_credential_file(),
            Some(PathBuf::from("/tmp/taskboard-token"))
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"").unwrap();
        file.flush().unwrap();

        let config = ClientConfig::load_from(file.path()).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.server_url, DEFAULT_SERVER_URL);
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"server_url = [").unwrap();
        file.flush().unwrap();

        let err = ClientConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, TaskboardError::Config(_)));
    }
}
