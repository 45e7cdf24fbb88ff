//! Key-value store location and key namespace.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_path() -> String {
    ".komplex/store.json".to_string()
}

fn default_namespace() -> String {
    "komplex".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// JSON file backing the store. Empty means in-memory only.
    #[serde(default = "default_path")]
    pub path: String,

    /// Prefix for every storage key (`{namespace}_courses`, ...).
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            namespace: default_namespace(),
        }
    }
}

impl StorageConfig {
    /// Whether state survives the process (a file path is set).
    #[must_use]
    pub const fn is_persistent(&self) -> bool {
        !self.path.is_empty()
    }

    /// Reject namespaces that would produce ambiguous keys.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty namespace or one
    /// containing whitespace or `_`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.namespace.is_empty()
            || self
                .namespace
                .chars()
                .any(|c| c.is_whitespace() || c == '_')
        {
            return Err(ConfigError::InvalidValue {
                field: "storage.namespace".into(),
                reason: format!(
                    "'{}' must be non-empty without whitespace or underscores",
                    self.namespace
                ),
            });
        }
        Ok(())
    }
}
