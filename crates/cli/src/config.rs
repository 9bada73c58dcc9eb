// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! State directory layout and configuration.
//!
//! Configuration is stored in `<state>/config.toml`. Every field has a
//! default, so a missing file is a valid (offline-only) configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::env;
use crate::error::{Error, Result};

const STATE_DIR_NAME: &str = "gym-coach";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "gym.db";
const PENDING_FILE_NAME: &str = "pending.jsonl";
const LOG_FILE_NAME: &str = "gym-coach.log";
const LOCK_FILE_NAME: &str = "gym-coach.lock";

/// Configuration stored in `<state>/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Never contact the remote service.
    #[serde(default)]
    pub offline: bool,
    /// Remote spreadsheet service settings.
    #[serde(default)]
    pub remote: RemoteConfig,
}

/// Remote service configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Web app endpoint, `http://` or `https://`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Reachability probe timeout in milliseconds (default: 1500).
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_probe_timeout_ms() -> u64 {
    1500
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig {
            url: None,
            timeout_secs: default_timeout_secs(),
            probe_timeout_ms: default_probe_timeout_ms(),
        }
    }
}

impl Config {
    /// Loads configuration from the state directory.
    ///
    /// A missing file yields the defaults.
    pub fn load(state_dir: &Path) -> Result<Self> {
        let config_path = state_dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the state directory.
    pub fn save(&self, state_dir: &Path) -> Result<()> {
        let config_path = state_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Applies environment and command-line overrides on top of the file.
    pub fn with_overrides(mut self, url: Option<String>, offline: bool) -> Result<Self> {
        if let Some(url) = url {
            validate_url(&url)?;
            self.remote.url = Some(url);
        }
        self.offline |= offline;
        Ok(self)
    }

    /// Applies `GYM_REMOTE_URL` and `GYM_OFFLINE`, then the `--offline` flag.
    pub fn with_env(self, offline_flag: bool) -> Result<Self> {
        self.with_overrides(env::remote_url(), env::offline() || offline_flag)
    }

    pub fn validate(&self) -> Result<()> {
        match &self.remote.url {
            Some(url) => validate_url(url),
            None => Ok(()),
        }
    }

    /// The remote URL, unless running offline.
    pub fn remote_url(&self) -> Option<&str> {
        if self.offline {
            return None;
        }
        self.remote.url.as_deref()
    }
}

/// Checks that a remote URL is `http://` or `https://` with a host.
pub fn validate_url(url: &str) -> Result<()> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| {
            Error::Config(format!(
                "invalid remote URL '{}': must start with http:// or https://",
                url
            ))
        })?;
    if rest.is_empty() || rest.starts_with('/') {
        return Err(Error::Config(format!(
            "invalid remote URL '{}': missing host",
            url
        )));
    }
    Ok(())
}

/// Picks the state directory: explicit flag, then `GYM_STATE_DIR`, then
/// the platform data directory.
pub fn resolve_state_dir(flag: Option<PathBuf>, from_env: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag.or(from_env) {
        return Ok(dir);
    }
    dirs::data_local_dir()
        .map(|d| d.join(STATE_DIR_NAME))
        .ok_or_else(|| {
            Error::Config(
                "cannot determine a data directory\n  hint: pass -C <dir> or set GYM_STATE_DIR"
                    .to_string(),
            )
        })
}

/// Files kept in the state directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatePaths {
    pub root: PathBuf,
    pub db: PathBuf,
    pub pending: PathBuf,
    pub log: PathBuf,
    pub lock: PathBuf,
}

impl StatePaths {
    pub fn new(root: &Path) -> Self {
        StatePaths {
            root: root.to_path_buf(),
            db: root.join(DB_FILE_NAME),
            pending: root.join(PENDING_FILE_NAME),
            log: root.join(LOG_FILE_NAME),
            lock: root.join(LOCK_FILE_NAME),
        }
    }

    /// Creates the state directory if it does not exist.
    pub fn ensure(&self) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
