//! Activity trail settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_dir() -> String {
    ".komplex/trail".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrailConfig {
    /// Append JSONL trail lines for every mutation.
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_dir")]
    pub dir: String,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dir: default_dir(),
        }
    }
}

impl TrailConfig {
    /// Trail directory when enabled, `None` otherwise.
    #[must_use]
    pub fn active_dir(&self) -> Option<PathBuf> {
        (self.enabled && !self.dir.is_empty()).then(|| PathBuf::from(&self.dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_by_default() {
        assert_eq!(TrailConfig::default().active_dir(), None);
    }

    #[test]
    fn enabled_returns_dir() {
        let config = TrailConfig {
            enabled: true,
            dir: "/tmp/trail".into(),
        };
        assert_eq!(config.active_dir(), Some(PathBuf::from("/tmp/trail")));
    }
}
