//! Configuration file support.
//!
//! The client reads two configuration locations:
//! - Global: `~/.stashclient/config.toml` - user-wide defaults
//! - Project: `.stashclient/config.toml` - per-checkout overrides
//!
//! Project config takes precedence over global config. Everything in here
//! is optional; the CLI falls back to `Project.toml`'s `source_host` when
//! no hostname is configured.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Stash client configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Server connection settings
    pub server: ServerConfig,

    /// Authentication settings
    pub auth: AuthConfig,
}

/// Server connection settings from the `[server]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Stash hostname, e.g. `git.amplify.com`
    pub hostname: Option<String>,

    /// REST API version override
    pub api_version: Option<String>,
}

/// Authentication settings from the `[auth]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Username to authenticate as (defaults to the local user)
    pub username: Option<String>,
}

impl ClientConfig {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if the file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create config directory: {}", parent.display()))?;
        }

        let contents =
            toml::to_string_pretty(self).with_context(|| "failed to serialize config")?;

        std::fs::write(path, contents)
            .with_context(|| format!("failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: ClientConfig) {
        if other.server.hostname.is_some() {
            self.server.hostname = other.server.hostname;
        }
        if other.server.api_version.is_some() {
            self.server.api_version = other.server.api_version;
        }
        if other.auth.username.is_some() {
            self.auth.username = other.auth.username;
        }
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.stashclient/config.toml)
/// 2. Global config (~/.stashclient/config.toml)
/// 3. Defaults
pub fn load_config(global_path: &Path, project_path: &Path) -> ClientConfig {
    let mut config = ClientConfig::default();

    if global_path.exists() {
        let global = ClientConfig::load_or_default(global_path);
        config.merge(global);
    }

    if project_path.exists() {
        let project = ClientConfig::load_or_default(project_path);
        config.merge(project);
    }

    config
}

/// Get the global client config directory (~/.stashclient).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".stashclient"))
}

/// Get the global config path (~/.stashclient/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.stashclient/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".stashclient").join("config.toml")
}
