//! Configuration errors
//!
//! This module defines error types for the configuration module.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Configuration error type
#[derive(Debug)]
pub enum ConfigError {
    /// File not found
    FileNotFound(PathBuf),

    /// Error parsing configuration
    ParseError(String),

    /// Invalid value for configuration option
    InvalidValue(String, String),

    /// Other error
    Other(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) =>
                write!(f, "Configuration file not found: {}", path.display()),

            ConfigError::ParseError(msg) =>
                write!(f, "Error parsing configuration: {}", msg),

            ConfigError::InvalidValue(name, msg) =>
                write!(f, "Invalid value for '{}': {}", name, msg),

            ConfigError::Other(msg) =>
                write!(f, "Configuration error: {}", msg),
        }
    }
}

impl Error for ConfigError {}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

impl From<::config::ConfigError> for ConfigError {
    fn from(err: ::config::ConfigError) -> Self {
        match err {
            ::config::ConfigError::NotFound(key) =>
                ConfigError::Other(format!("missing key: {}", key)),
            other => ConfigError::ParseError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_value() {
        let err = ConfigError::InvalidValue(
            "api_base_url".to_string(),
            "must start with http:// or https://".to_string(),
        );
        assert_eq!(
            err.to_string(),
            "Invalid value for 'api_base_url': must start with http:// or https://"
        );
    }

    #[test]
    fn test_display_file_not_found() {
        let err = ConfigError::FileNotFound(PathBuf::from("missing.json"));
        assert!(err.to_string().contains("missing.json"));
    }
}
