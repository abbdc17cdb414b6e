//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use serde defaults throughout, so a
//! missing file or section always yields a working configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileConfig {
    /// Completion endpoint settings
    pub api: FileApiConfig,
    /// Catalog resource settings
    pub catalog: FileCatalogConfig,
    /// Selection persistence settings
    pub storage: FileStorageConfig,
    /// Conversation log settings
    pub log: FileLogConfig,
}

/// Raw completion endpoint configuration from TOML (`[api]` section)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileApiConfig {
    /// Completion endpoint URL. Defaults to a local proxy so no credential
    /// ever lives in client configuration.
    pub endpoint: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Maximum output size per completion
    pub max_tokens: u32,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8787/api/chat".to_string(),
            model: "gpt-4o".to_string(),
            max_tokens: 500,
        }
    }
}

/// Raw catalog configuration from TOML (`[catalog]` section)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// Path to the products JSON document
    pub path: PathBuf,
}

impl Default for FileCatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("products.json"),
        }
    }
}

/// Raw storage configuration from TOML (`[storage]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Where the selected product ids are persisted. When unset, a
    /// per-user data directory is used.
    pub selection_path: Option<PathBuf>,
}

impl FileStorageConfig {
    /// Resolve the selection file path, falling back to the platform data
    /// directory and finally the working directory.
    pub fn resolved_selection_path(&self) -> PathBuf {
        if let Some(path) = &self.selection_path {
            return path.clone();
        }
        dirs::data_local_dir()
            .map(|d| d.join("shelfie").join("selected_product_ids.json"))
            .unwrap_or_else(|| PathBuf::from("selected_product_ids.json"))
    }
}

/// Raw conversation log configuration from TOML (`[log]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileLogConfig {
    /// JSONL conversation log path; unset disables the log.
    pub conversation_log: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_self_contained() {
        let config = FileConfig::default();
        assert_eq!(config.api.model, "gpt-4o");
        assert_eq!(config.api.max_tokens, 500);
        assert_eq!(config.catalog.path, PathBuf::from("products.json"));
        assert!(config.storage.selection_path.is_none());
        assert!(config.log.conversation_log.is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let toml_str = r#"
[api]
endpoint = "https://api.openai.com/v1/chat/completions"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.endpoint, "https://api.openai.com/v1/chat/completions");
        // Untouched fields keep their defaults
        assert_eq!(config.api.model, "gpt-4o");
        assert_eq!(config.catalog.path, PathBuf::from("products.json"));
    }

    #[test]
    fn test_storage_path_override_wins() {
        let config = FileStorageConfig {
            selection_path: Some(PathBuf::from("/tmp/sel.json")),
        };
        assert_eq!(config.resolved_selection_path(), PathBuf::from("/tmp/sel.json"));
    }

    #[test]
    fn test_resolved_selection_path_has_filename() {
        let config = FileStorageConfig::default();
        let path = config.resolved_selection_path();
        assert_eq!(
            path.file_name().unwrap().to_string_lossy(),
            "selected_product_ids.json"
        );
    }
}
