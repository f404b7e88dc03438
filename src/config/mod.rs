// ABOUTME: Configuration types and parsing for dockery.yml.
// ABOUTME: Handles discovery, YAML parsing, defaults and validation.

mod events;
mod remove_mode;

pub use events::EventsConfig;
pub use remove_mode::RemoveMode;

use crate::error::{Error, Result};
use crate::runtime::{RuntimeConfig, RuntimeType};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "dockery.yml";
pub const CONFIG_FILENAME_ALT: &str = "dockery.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".dockery/config.yml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Explicit runtime type; auto-detected when absent.
    #[serde(default)]
    pub runtime: Option<RuntimeType>,

    /// Explicit socket path.
    #[serde(default)]
    pub socket: Option<String>,

    /// Request timeout for runtime calls.
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,

    #[serde(default)]
    pub remove: RemoveMode,

    #[serde(default)]
    pub events: EventsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            runtime: None,
            socket: None,
            timeout: default_timeout(),
            remove: RemoveMode::default(),
            events: EventsConfig::default(),
        }
    }
}

fn default_timeout() -> Duration {
    Duration::from_secs(120)
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Load the first config file found in `dir`, or defaults when there is none.
    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                tracing::debug!("loading configuration from {}", path.display());
                return Self::load(path);
            }
        }

        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<()> {
        // The runtime client counts its timeout in whole seconds.
        if self.timeout < Duration::from_secs(1) {
            return Err(Error::InvalidConfig(format!(
                "timeout must be at least 1s, got {:?}",
                self.timeout
            )));
        }
        self.events.validate().map_err(Error::InvalidConfig)
    }

    /// Convert to RuntimeConfig for use with detect_local.
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            runtime: self.runtime,
            socket: self.socket.clone(),
        }
    }
}
