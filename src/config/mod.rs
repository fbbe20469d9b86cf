//! Configuration module
//!
//! This module handles console configuration, loading it from layered sources
//! (built-in defaults, an optional JSON file, `PROVENANCE_*` environment variables and
//! command-line flags) and validating the result.

mod defaults;
mod error;
mod loader;
mod validator;

pub use self::defaults::{DEFAULT_CONFIG_FILE, ENV_PREFIX, LOG_LEVEL_STR};
pub use self::error::{ConfigError, Result};
pub use self::loader::ConfigLoader;
pub use self::validator::validate_config;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Console configuration
///
/// Every field is optional in every source; later sources win.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Base URL of the provenance backend (e.g. `https://api.example.com`)
    #[serde(default = "defaults::api_base_url")]
    pub api_base_url: Option<String>,

    /// Base URL of a transaction explorer used to link transaction hashes
    #[serde(default = "defaults::tx_explorer_base_url")]
    pub tx_explorer_base_url: Option<String>,

    /// API key sent as `X-API-Key` on privileged calls
    #[serde(default)]
    pub api_key: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "defaults::log_level")]
    pub log_level: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: defaults::api_base_url(),
            tx_explorer_base_url: defaults::tx_explorer_base_url(),
            api_key: None,
            log_level: defaults::log_level(),
        }
    }
}

// The API key never reaches log output.
impl fmt::Debug for ConsoleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleConfig")
            .field("api_base_url", &self.api_base_url)
            .field("tx_explorer_base_url", &self.tx_explorer_base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("log_level", &self.log_level)
            .finish()
    }
}

/// Values supplied on the command line
///
/// `None` leaves the underlying layer untouched.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub api_base_url: Option<String>,
    pub tx_explorer_base_url: Option<String>,
    pub api_key: Option<String>,
    pub log_level: Option<String>,
}

impl ConsoleConfig {
    /// Apply command-line overrides on top of this configuration
    pub fn merge(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(url) = overrides.api_base_url {
            self.api_base_url = Some(url);
        }
        if let Some(url) = overrides.tx_explorer_base_url {
            self.tx_explorer_base_url = Some(url);
        }
        if let Some(key) = overrides.api_key {
            self.api_key = Some(key);
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        self
    }

    /// Normalised API base URL, `None` when requests should use relative paths
    pub fn api_base_url(&self) -> Option<String> {
        self.api_base_url.as_deref().and_then(normalize_base_url)
    }

    /// Normalised explorer base URL, `None` when transaction hashes are not linked
    pub fn tx_explorer_base_url(&self) -> Option<String> {
        self.tx_explorer_base_url.as_deref().and_then(normalize_base_url)
    }

    /// Configured log level, or the default when it is not one `env_logger` knows
    pub fn effective_log_level(&self) -> &str {
        let level = self.log_level.as_str();
        if defaults::LOG_LEVELS.contains(&level) {
            level
        } else {
            defaults::LOG_LEVEL_STR
        }
    }

    /// API key, treating an empty string as absent
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }
}

/// Strip one trailing `/` and treat an empty value as unset
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
