//! Configuration validator
//!
//! This module provides functionality for validating configuration.

use log::warn;

use crate::config::defaults::LOG_LEVELS;
use crate::config::error::{ConfigError, Result};
use crate::config::ConsoleConfig;

/// Validate the configuration
pub fn validate_config(config: &ConsoleConfig) -> Result<()> {
    validate_endpoint_settings(config)?;
    validate_general_settings(config);

    Ok(())
}

/// Validate the backend and explorer URLs
fn validate_endpoint_settings(config: &ConsoleConfig) -> Result<()> {
    match config.api_base_url() {
        Some(url) => validate_http_url("api_base_url", &url)?,
        None => warn!("No API base URL configured; requests will use relative paths"),
    }

    if let Some(url) = config.tx_explorer_base_url() {
        validate_http_url("tx_explorer_base_url", &url)?;
    }

    Ok(())
}

/// Validate general settings
fn validate_general_settings(config: &ConsoleConfig) {
    if !LOG_LEVELS.contains(&config.log_level.as_str()) {
        warn!("Invalid log level: {}. Using default: info", config.log_level);
    }

    if config.api_key().is_none() {
        warn!("No API key configured; only public verification will succeed");
    }
}

fn validate_http_url(name: &str, url: &str) -> Result<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue(
            name.to_string(),
            format!("'{}' must start with http:// or https://", url),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ConsoleConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let config = ConsoleConfig {
            api_base_url: Some("ftp://example.com".to_string()),
            ..Default::default()
        };

        match validate_config(&config) {
            Err(ConfigError::InvalidValue(name, _)) => assert_eq!(name, "api_base_url"),
            other => panic!("expected invalid api_base_url, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_non_http_explorer_url() {
        let config = ConsoleConfig {
            api_base_url: Some("https://api.example.com".to_string()),
            tx_explorer_base_url: Some("explorer.example.com/tx".to_string()),
            ..Default::default()
        };

        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_unknown_log_level_only_warns() {
        let config = ConsoleConfig {
            log_level: "verbose".to_string(),
            ..Default::default()
        };

        assert!(validate_config(&config).is_ok());
    }
}
