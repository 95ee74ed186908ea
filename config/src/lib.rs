//! # Configuration Management for pgscalar
//!
//! This crate provides the configuration consumed by the pgscalar mapper:
//! how malformed stored values are treated and what gets logged.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::{InetConfig, InvalidAddressPolicy, MappingConfig};
//!
//! let config = MappingConfig::new(
//!     InetConfig::new(InvalidAddressPolicy::Unspecified),
//!     false,
//! );
//! assert_eq!(config.inet.on_invalid, InvalidAddressPolicy::Unspecified);
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! # include stored values in debug logs
//! log_values = false
//!
//! [inet]
//! # "error" rejects unparseable addresses, "unspecified" reads them as the empty address
//! on_invalid = "error"
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::MappingConfig;
//!
//! // Load from PGSCALAR_CONFIG or ./pgscalar.toml, falling back to defaults
//! let config = MappingConfig::load()?;
//!
//! // Or load from custom path
//! let config = MappingConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./pgscalar.toml";
const CONFIG_ENV_VAR: &str = "PGSCALAR_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// What to do with an `inet` value whose text does not parse as an address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidAddressPolicy {
    /// Fail the read with a decode error
    #[default]
    Error,
    /// Store the unspecified (empty) address and log a warning
    Unspecified,
}

/// `inet` column settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InetConfig {
    pub on_invalid: InvalidAddressPolicy,
}

/// Complete mapper configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    pub inet: InetConfig,
    pub log_values: bool,
}

impl MappingConfig {
    /// Create a new mapping configuration
    pub fn new(inet: InetConfig, log_values: bool) -> Self {
        Self { inet, log_values }
    }

    /// Load configuration from the TOML file named by `PGSCALAR_CONFIG` (environment
    /// or `.env`), then `./pgscalar.toml`, then built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is not an error
        dotenvy::dotenv().ok();

        if let Ok(config_path) = env::var(CONFIG_ENV_VAR) {
            Self::from_file(&config_path)
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Whether unparseable addresses should be read leniently
    pub fn lenient_inet(&self) -> bool {
        self.inet.on_invalid == InvalidAddressPolicy::Unspecified
    }
}

impl InetConfig {
    /// Create a new inet configuration
    pub fn new(on_invalid: InvalidAddressPolicy) -> Self {
        Self { on_invalid }
    }
}
