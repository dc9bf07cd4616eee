//! Unified error handling for the storefront core.
//!
//! Provides a unified `StorefrontError` wrapping the per-concern error
//! types. Embedders that want a single error channel can return
//! `Result<T>`; the individual types stay available for callers that match
//! on a specific concern.

use thiserror::Error;

use crate::cart::{CartError, StoreError};
use crate::config::ConfigError;
use crate::content::ContentError;

/// Application-level error type for the storefront core.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Fixture content failed to load.
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// A cart operation violated its caller contract.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Cart snapshot storage failed.
    #[error("Cart store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storefront_error_display() {
        let err = StorefrontError::from(CartError::InvalidQuantity(0));
        assert_eq!(err.to_string(), "Cart error: quantity must be at least 1, got 0");

        let err = StorefrontError::from(ConfigError::InvalidEnvVar(
            "STOREFRONT_CART_STORE_DIR".to_string(),
            "must not be empty".to_string(),
        ));
        assert_eq!(
            err.to_string(),
            "Config error: Invalid environment variable STOREFRONT_CART_STORE_DIR: must not be empty"
        );
    }
}
