//! Persistence port for the cart ledger.
//!
//! The ledger writes its snapshot through a [`CartStore`] after every
//! mutation and reads it back once at startup. The store is injected so the
//! ledger can be tested against [`MemoryStore`] while production embedders
//! use [`JsonFileStore`].

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use earrings_things_core::Cart;
use thiserror::Error;

/// Fixed storage key for the persisted cart snapshot.
pub const CART_STORE_KEY: &str = "earrings-things-cart";

/// Errors from reading or writing a cart snapshot.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cart store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cart snapshot serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A single string-keyed slot holding a serialized cart snapshot.
///
/// There is no versioning or migration scheme: a snapshot that fails to
/// parse is reported as an error and the caller starts from an empty cart.
pub trait CartStore {
    /// Read the stored snapshot. `Ok(None)` means nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error when the slot exists but cannot be read or parsed.
    fn load(&self) -> Result<Option<Cart>, StoreError>;

    /// Overwrite the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error when the snapshot cannot be serialized or written.
    fn save(&self, cart: &Cart) -> Result<(), StoreError>;
}

/// Cart store backed by a JSON file under [`CART_STORE_KEY`].
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store writing to `<dir>/earrings-things-cart.json`.
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{CART_STORE_KEY}.json")),
        }
    }

    /// The snapshot file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStore for JsonFileStore {
    fn load(&self) -> Result<Option<Cart>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&self.path)?;
        let cart = serde_json::from_str(&raw)?;
        Ok(Some(cart))
    }

    fn save(&self, cart: &Cart) -> Result<(), StoreError> {
        let raw = serde_json::to_string(cart)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory cart store.
///
/// Holds the serialized snapshot string rather than the value, so tests
/// exercise the same encode/decode path as the file store. Single-writer by
/// design (the ledger is single-threaded), hence the `RefCell`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
}

impl MemoryStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a raw snapshot, parseable or not.
    #[must_use]
    pub fn with_snapshot(raw: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(raw.into())),
        }
    }

    /// The raw snapshot currently stored.
    #[must_use]
    pub fn snapshot(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl CartStore for MemoryStore {
    fn load(&self) -> Result<Option<Cart>, StoreError> {
        match self.slot.borrow().as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, cart: &Cart) -> Result<(), StoreError> {
        let raw = serde_json::to_string(cart)?;
        *self.slot.borrow_mut() = Some(raw);
        Ok(())
    }
}
