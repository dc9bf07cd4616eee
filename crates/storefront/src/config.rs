//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STOREFRONT_CART_STORE_DIR` - Directory holding the persisted cart
//!   snapshot (default: current directory)

use std::env::{self, VarError};
use std::path::PathBuf;

use thiserror::Error;

const CART_STORE_DIR_VAR: &str = "STOREFRONT_CART_STORE_DIR";
const DEFAULT_CART_STORE_DIR: &str = ".";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory the cart snapshot is persisted under
    pub cart_store_dir: PathBuf,
}

impl StorefrontConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let cart_store_dir = match env::var(CART_STORE_DIR_VAR) {
            Ok(dir) if dir.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvVar(
                    CART_STORE_DIR_VAR.to_string(),
                    "must not be empty".to_string(),
                ));
            }
            Ok(dir) => PathBuf::from(dir),
            Err(VarError::NotPresent) => PathBuf::from(DEFAULT_CART_STORE_DIR),
            Err(VarError::NotUnicode(_)) => {
                return Err(ConfigError::InvalidEnvVar(
                    CART_STORE_DIR_VAR.to_string(),
                    "not valid UTF-8".to_string(),
                ));
            }
        };

        Ok(Self { cart_store_dir })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            cart_store_dir: PathBuf::from(DEFAULT_CART_STORE_DIR),
        }
    }
}
