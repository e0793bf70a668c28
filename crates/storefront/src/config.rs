//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SWEET_SLAC_DATA_DIR` - Directory of the file store (default: .sweet-slac)
//! - `SWEET_SLAC_STORE` - Store backend, `file` or `memory` (default: file)
//! - `SWEET_SLAC_KEY_PREFIX` - Prefix for the four store keys (default: none)
//!
//! The admin password is fixed and cannot be configured.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::store::{FileStore, KeyValueStore, MemoryStore, StoreError, StoreKeys};

const DATA_DIR_VAR: &str = "SWEET_SLAC_DATA_DIR";
const STORE_VAR: &str = "SWEET_SLAC_STORE";
const KEY_PREFIX_VAR: &str = "SWEET_SLAC_KEY_PREFIX";

const DEFAULT_DATA_DIR: &str = ".sweet-slac";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Where the snapshot is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    /// One JSON file per key under the data directory.
    #[default]
    File,
    /// In memory only; lost when the process exits.
    Memory,
}

impl StoreBackend {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Memory => "memory",
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown store backend '{other}', expected file or memory")),
        }
    }
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub data_dir: PathBuf,
    pub backend: StoreBackend,
    pub key_prefix: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            backend: StoreBackend::default(),
            key_prefix: String::new(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable holds an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = PathBuf::from(get_env_or_default(&lookup, DATA_DIR_VAR, DEFAULT_DATA_DIR));

        let backend = get_optional_env(&lookup, STORE_VAR)
            .map(|raw| raw.parse::<StoreBackend>())
            .transpose()
            .map_err(|e| ConfigError::InvalidEnvVar(STORE_VAR.to_string(), e))?
            .unwrap_or_default();

        let key_prefix = get_optional_env(&lookup, KEY_PREFIX_VAR).unwrap_or_default();
        validate_key_prefix(&key_prefix)?;

        Ok(Self {
            data_dir,
            backend,
            key_prefix,
        })
    }

    /// Store keys with the configured prefix.
    #[must_use]
    pub fn store_keys(&self) -> StoreKeys {
        StoreKeys::with_prefix(&self.key_prefix)
    }

    /// Open the configured store.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the data directory cannot be created.
    pub fn open_store(&self) -> Result<Box<dyn KeyValueStore>, StoreError> {
        let store: Box<dyn KeyValueStore> = match self.backend {
            StoreBackend::File => Box::new(FileStore::open(&self.data_dir)?),
            StoreBackend::Memory => Box::new(MemoryStore::new()),
        };
        tracing::debug!(backend = %self.backend, dir = %self.data_dir.display(), "store opened");
        Ok(store)
    }
}

/// Get an optional environment variable, treating blank values as unset.
fn get_optional_env(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|value| !value.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> String {
    get_optional_env(lookup, key).unwrap_or_else(|| default.to_string())
}

/// Prefixed keys end up in file names, so only a safe character set is allowed.
fn validate_key_prefix(prefix: &str) -> Result<(), ConfigError> {
    if let Some(bad) = prefix
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(ConfigError::InvalidEnvVar(
            KEY_PREFIX_VAR.to_string(),
            format!("character '{bad}' is not allowed"),
        ));
    }
    Ok(())
}
