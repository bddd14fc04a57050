//! Settings for the command line tool, read from TOML.
//!
//! ```
//! use qubie_net::assignment::Enumeration;
//! use qubie_net::catalog::CatalogFormat;
//! use qubie_net::config::AppConfig;
//!
//! let config = AppConfig::from_toml_str(r#"
//!     log_level = "debug"
//!     enumeration = "full_permutations"
//!
//!     [catalog]
//!     path = "fishes.json"
//!     format = "entries"
//! "#).unwrap();
//!
//! assert_eq!(config.enumeration, Enumeration::FullPermutations);
//! assert_eq!(config.catalog.format, CatalogFormat::Entries);
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::assignment::Enumeration;
use crate::catalog::CatalogFormat;

/// File picked up when no `--config` is given.
pub const DEFAULT_CONFIG_PATH: &str = "qubie-net.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    pub enumeration: Enumeration,
    pub catalog: CatalogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_level: "info".to_string(),
            enumeration: Enumeration::default(),
            catalog: CatalogConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub path: Option<PathBuf>,
    pub format: CatalogFormat,
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Like [`AppConfig::load`], but a missing file means defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Invalid("log_level must not be empty".to_string()));
        }
        Ok(())
    }
}
