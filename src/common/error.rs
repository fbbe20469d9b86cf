//! Error handling module
//!
//! This module defines the crate-level error type and result alias.

use std::io;
use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;

/// Provenance console error type
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Backend API error
    #[error("{0}")]
    Api(#[from] ApiError),

    /// JSON rendering error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Input rejected before reaching the network
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A pipeline step ended in the error state
    #[error("Step '{step}' failed: {message}")]
    StepFailed {
        /// Step label
        step: String,
        /// Message recorded for the failing action
        message: String,
    },

    /// Other error
    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias
///
/// This is a `Result` type alias that uses our custom `ConsoleError`.
pub type Result<T> = std::result::Result<T, ConsoleError>;
