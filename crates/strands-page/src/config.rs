//! Page configuration.
//!
//! Every field has a default, so an empty file (or no file at all) gives the
//! stock behavior. Configuration is YAML:
//!
//! ```yaml
//! toast_duration_ms: 5000
//! welcome_message: "Hello again"
//! scroll_offset: 64
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Errors from loading a [`PageConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Tunable page behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// How long a toast stays visible.
    pub toast_duration_ms: u64,
    /// Delay between page load and the welcome toast.
    pub welcome_delay_ms: u64,
    pub welcome_message: String,
    pub subscribe_message: String,
    pub frame_error_message: String,
    /// Pixels kept clear above an anchor target (the fixed header height).
    pub scroll_offset: i32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 3000,
            welcome_delay_ms: 1000,
            welcome_message: "Welcome to Strands Unlimited!".to_string(),
            subscribe_message: "Subscribed successfully! Check your email for confirmation."
                .to_string(),
            frame_error_message: "Failed to load game. Please refresh or try again later."
                .to_string(),
            scroll_offset: 80,
        }
    }
}

impl PageConfig {
    /// Parses YAML. Missing fields take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn welcome_delay(&self) -> Duration {
        Duration::from_millis(self.welcome_delay_ms)
    }
}
