//! Progress notifier and poll fallback settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_poll_interval_ms() -> u64 {
    2000
}

const fn default_channel_capacity() -> usize {
    64
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SyncConfig {
    /// How often watchers re-read progress when no signal arrives.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Buffered signals per subscriber before it lags.
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

impl SyncConfig {
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when the interval or capacity is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "sync.poll_interval_ms".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.channel_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "sync.channel_capacity".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}
