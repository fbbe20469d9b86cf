//! Logging utilities
//!
//! This module initialises the `env_logger` backend behind the `log` facade.

/// Initialise the logging system
///
/// `RUST_LOG` takes precedence when set; otherwise `level` is used as the filter.
///
/// # Parameters
///
/// * `level` - Default log level (error, warn, info, debug, trace)
pub fn init_logger(level: &str) {
    let env = env_logger::Env::default()
        .filter_or("RUST_LOG", level);

    // A second initialisation (tests, embedding applications) is not an error.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_secs()
        .try_init();
}
