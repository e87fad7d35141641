// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification configuration
//!
//! Every component receives a [`SharedConfig`] handle at construction and
//! reads it at the moment its behavior depends on a setting: builders
//! capture defaults when created, payloads capture queue placement when
//! built, channel handlers read bucket keys on delivery, and the
//! translator reads the translate flag on every resolution.

use crate::kind::NotificationType;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Errors from loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Top-level notification settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FluentConfig {
    /// Pass keys through the localizer before rendering.
    pub translate: bool,
    /// Channels a builder starts with when `via()` is never called.
    pub default_channels: Vec<String>,
    /// Type a builder starts with when no selector is called.
    pub default_type: NotificationType,
    /// Request-scoped bucket names used by the toast and alert channels.
    #[serde(alias = "flash")]
    pub session: SessionKeys,
    pub queue: QueueConfig,
}

impl Default for FluentConfig {
    fn default() -> Self {
        Self {
            translate: true,
            default_channels: vec!["toast".to_string()],
            default_type: NotificationType::Info,
            session: SessionKeys::default(),
            queue: QueueConfig::default(),
        }
    }
}

impl FluentConfig {
    /// Parse configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

/// Bucket keys for the request-scoped channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionKeys {
    pub toasts: String,
    pub alerts: String,
}

impl Default for SessionKeys {
    fn default() -> Self {
        Self {
            toasts: "toasts".to_string(),
            alerts: "alerts".to_string(),
        }
    }
}

/// Queue routing metadata attached to payloads when enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    pub enabled: bool,
    pub connection: Option<String>,
    pub queue: Option<String>,
}

/// Cloneable handle to the live configuration.
#[derive(Debug, Clone, Default)]
pub struct SharedConfig {
    inner: Arc<RwLock<FluentConfig>>,
}

impl SharedConfig {
    pub fn new(config: FluentConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Copy of the configuration as it is right now.
    pub fn snapshot(&self) -> FluentConfig {
        self.inner.read().clone()
    }

    /// Read a single value without cloning the whole configuration.
    pub fn read<T>(&self, f: impl FnOnce(&FluentConfig) -> T) -> T {
        f(&self.inner.read())
    }

    /// Mutate the configuration in place. Already-built builders and
    /// payloads keep the values they captured.
    pub fn update(&self, f: impl FnOnce(&mut FluentConfig)) {
        f(&mut self.inner.write());
    }
}

impl From<FluentConfig> for SharedConfig {
    fn from(config: FluentConfig) -> Self {
        Self::new(config)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
