//! Common module
//!
//! This module contains the crate-level error type and the logging setup shared by the
//! library and the command-line binary.

pub mod error;
pub mod log;

// Re-export commonly used types and functions
pub use error::{ConsoleError, Result};
pub use log::init_logger;
