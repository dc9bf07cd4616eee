//! The cart ledger.
//!
//! A value-holding reducer: four mutation entry points (`add`, `remove`,
//! `set_quantity`, `clear`) over an ordered line list, with derived totals
//! rebuilt after every transition and the snapshot persisted fire-and-forget
//! through the injected [`CartStore`].
//!
//! One inherited quirk is preserved deliberately: `add` keys lines by
//! `(product, color)`, but `remove` and `set_quantity` match on product ID
//! alone and therefore touch every color variant of that product at once.
//! Tests pin this behavior; see the method docs.

pub mod store;

pub use store::{CART_STORE_KEY, CartStore, JsonFileStore, MemoryStore, StoreError};

use chrono::Utc;
use earrings_things_core::{Cart, CartItem, Product, ProductId};
use thiserror::Error;

/// Caller contract violations on ledger operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// `add` requires a quantity of at least 1.
    #[error("quantity must be at least 1, got {0}")]
    InvalidQuantity(u32),
}

/// The cart state machine.
///
/// Owns the [`Cart`] value and the persistence port. All transitions run
/// synchronously to completion; the single event-handling context is the
/// only writer, so no locking is involved.
#[derive(Debug)]
pub struct CartLedger<S> {
    cart: Cart,
    store: S,
}

impl<S: CartStore> CartLedger<S> {
    /// Create a ledger, restoring any snapshot the store holds.
    ///
    /// A missing snapshot starts an empty cart. An unreadable one is
    /// discarded silently (logged, never propagated) and also starts empty.
    /// Persisted totals are accepted as stored rather than recomputed.
    pub fn restore(store: S) -> Self {
        let cart = match store.load() {
            Ok(Some(cart)) => {
                tracing::debug!(items = cart.items.len(), "restored cart snapshot");
                cart
            }
            Ok(None) => Cart::empty(),
            Err(e) => {
                tracing::warn!("discarding unreadable cart snapshot: {e}");
                Cart::empty()
            }
        };
        Self { cart, store }
    }

    /// The current cart state.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add `quantity` of a product in the given color.
    ///
    /// An existing `(product, color)` line has its quantity incremented;
    /// otherwise a new line is appended with the current timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] when `quantity` is zero; a
    /// non-positive add would silently corrupt the totals otherwise.
    pub fn add(
        &mut self,
        product: &Product,
        quantity: u32,
        selected_color: Option<&str>,
    ) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity(quantity));
        }

        match self
            .cart
            .items
            .iter_mut()
            .find(|item| item.is_variant(&product.id, selected_color))
        {
            Some(item) => item.quantity += quantity,
            None => self.cart.items.push(CartItem {
                product_id: product.id.clone(),
                product: product.clone(),
                quantity,
                selected_color: selected_color.map(String::from),
                added_at: Utc::now(),
            }),
        }

        tracing::debug!(product = %product.id, quantity, "added to cart");
        self.commit();
        Ok(())
    }

    /// Remove a product from the cart.
    ///
    /// Drops every line whose product matches, across all color variants.
    /// An unknown product ID is a no-op apart from the totals rebuild.
    pub fn remove(&mut self, product_id: &ProductId) {
        self.cart.items.retain(|item| item.product_id != *product_id);
        tracing::debug!(product = %product_id, "removed from cart");
        self.commit();
    }

    /// Set the quantity for a product.
    ///
    /// Zero behaves as [`remove`](Self::remove). Otherwise every line whose
    /// product matches is set to `quantity`, across all color variants. An
    /// unknown product ID is a no-op apart from the totals rebuild.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }

        for item in self
            .cart
            .items
            .iter_mut()
            .filter(|item| item.product_id == *product_id)
        {
            item.quantity = quantity;
        }
        tracing::debug!(product = %product_id, quantity, "set cart quantity");
        self.commit();
    }

    /// Empty the cart. All derived totals reset to zero.
    pub fn clear(&mut self) {
        self.cart = Cart::empty();
        tracing::debug!("cleared cart");
        self.persist();
    }

    fn commit(&mut self) {
        self.cart.recompute();
        self.persist();
    }

    /// Fire-and-forget snapshot write; failures are logged, never surfaced.
    fn persist(&self) {
        if let Err(e) = self.store.save(&self.cart) {
            tracing::warn!("failed to persist cart snapshot: {e}");
        }
    }
}
