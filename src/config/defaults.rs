//! Default configuration values
//!
//! Single source of truth for defaults shared by the loader, the validator and the CLI.

/// Environment variable prefix for all configuration options
pub const ENV_PREFIX: &str = "PROVENANCE";

/// Separator between the prefix and the option name (`PROVENANCE_API_KEY`)
pub const ENV_SEPARATOR: &str = "_";

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "provenance.json";

/// Default log level as string
pub const LOG_LEVEL_STR: &str = "info";

/// Log levels accepted by `env_logger`
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Default log level
pub fn log_level() -> String {
    LOG_LEVEL_STR.to_string()
}

/// Default API base URL
///
/// No base URL means request paths are used as relative paths.
pub fn api_base_url() -> Option<String> {
    None
}

/// Default transaction explorer base URL (no link)
pub fn tx_explorer_base_url() -> Option<String> {
    None
}
