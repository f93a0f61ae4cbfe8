//! Board configuration.
//!
//! The planner endpoint is resolved through a chain:
//!
//! 1. explicit value passed to the builder (`--planner-url` on the CLI)
//! 2. `QUESTLOG_PLANNER_URL` environment variable
//! 3. `$XDG_CONFIG_HOME/questlog/config.json`
//! 4. [`DEFAULT_PLANNER_URL`]

use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};

use crate::error::{QuestError, Result, ResultExt};

/// Planner endpoint used when nothing else is configured.
pub const DEFAULT_PLANNER_URL: &str = "http://localhost:3001/api/quests/create-plan";

/// Request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding the planner endpoint.
pub const PLANNER_URL_ENV: &str = "QUESTLOG_PLANNER_URL";

/// Settings for talking to the external planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Endpoint receiving the create-plan POST
    pub planner_url: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            planner_url: DEFAULT_PLANNER_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl BoardConfig {
    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Loads the configuration from the XDG config file if it exists, then
    /// applies the environment override.
    ///
    /// # Errors
    ///
    /// Returns `QuestError::Configuration` for a malformed file and
    /// `QuestError::FileSystem` when it cannot be read.
    pub fn load() -> Result<Self> {
        let mut config = match Self::default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };

        if let Ok(url) = env::var(PLANNER_URL_ENV)
            && !url.is_empty()
        {
            config.planner_url = url;
        }

        Ok(config)
    }

    /// Reads a JSON configuration file.
    ///
    /// # Errors
    ///
    /// See [`BoardConfig::load`].
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| QuestError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_json::from_str(&contents)
            .with_context(format!("Invalid config file {}", path.display()))
    }

    /// `$XDG_CONFIG_HOME/questlog/config.json`, when a home is known.
    pub fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("questlog").find_config_file("config.json")
    }
}
