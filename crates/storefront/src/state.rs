//! Application state shared across UI event handlers.

use std::sync::Arc;

use crate::cart::{CartLedger, JsonFileStore};
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::content::{self, ContentError};

/// Application state shared by all rendering code.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// loaded catalog and configuration. The cart ledger is intentionally not
/// held here: it is a mutable value owned by the single event-handling
/// context, created once through [`AppState::cart_ledger`].
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
}

impl AppState {
    /// Create a new application state, loading the embedded catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog fixtures cannot be parsed.
    pub fn new(config: StorefrontConfig) -> Result<Self, ContentError> {
        let catalog = content::load_catalog()?;

        Ok(Self {
            inner: Arc::new(AppStateInner { config, catalog }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Build the cart ledger backed by the configured snapshot directory,
    /// restoring any previous session's cart.
    #[must_use]
    pub fn cart_ledger(&self) -> CartLedger<JsonFileStore> {
        CartLedger::restore(JsonFileStore::new(&self.inner.config.cart_store_dir))
    }
}
