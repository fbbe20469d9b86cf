//! Configuration loading functionality
//!
//! Layers the built-in defaults, an optional JSON file and `PROVENANCE_*` environment
//! variables using the `config` crate. Command-line overrides are applied afterwards by
//! the binary through [`ConsoleConfig::merge`].

use std::path::{Path, PathBuf};

use ::config::{Config, Environment, File, FileFormat};
use log::debug;

use crate::config::defaults::{self, DEFAULT_CONFIG_FILE, ENV_PREFIX, ENV_SEPARATOR};
use crate::config::error::{ConfigError, Result};
use crate::config::ConsoleConfig;

/// Trait for loading configuration from different sources
pub trait ConfigLoader: Sized {
    /// Load configuration from a JSON file (on top of defaults only)
    fn from_file<P: AsRef<Path>>(path: P) -> Result<Self>;

    /// Load configuration from environment variables (on top of defaults only)
    fn from_env() -> Result<Self>;

    /// Load defaults < file < environment
    ///
    /// An explicit `path` must exist; without one, `provenance.json` in the working
    /// directory is used when present.
    fn load(path: Option<&Path>) -> Result<Self>;
}

impl ConfigLoader for ConsoleConfig {
    fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        ensure_exists(path)?;

        let config = base_builder()?
            .add_source(json_file(path, true))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    fn from_env() -> Result<Self> {
        let config = base_builder()?
            .add_source(env_source())
            .build()?;

        Ok(config.try_deserialize()?)
    }

    fn load(path: Option<&Path>) -> Result<Self> {
        let (file_path, required) = match path {
            Some(path) => {
                ensure_exists(path)?;
                (path.to_path_buf(), true)
            }
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        debug!(
            "Loading configuration (file: {}, required: {})",
            file_path.display(),
            required
        );

        let config = base_builder()?
            .add_source(json_file(&file_path, required))
            .add_source(env_source())
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

fn base_builder() -> Result<::config::ConfigBuilder<::config::builder::DefaultState>> {
    Ok(Config::builder().set_default("log_level", defaults::LOG_LEVEL_STR)?)
}

fn json_file(path: &Path, required: bool) -> File<::config::FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Json).required(required)
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX).prefix_separator(ENV_SEPARATOR)
}

fn ensure_exists(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ConfigError::FileNotFound(path.to_path_buf()))
    }
}
