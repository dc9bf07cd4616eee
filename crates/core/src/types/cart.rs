//! Cart value types and derived-total arithmetic.
//!
//! The cart is a plain value: an ordered list of line items plus totals that
//! are always a pure function of those items. Mutation lives in the
//! storefront's ledger; this module only defines the shapes and the totals
//! computation so both the ledger and its persisted snapshots agree exactly.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::price::round_to_cents;
use crate::types::product::Product;

// Decimal::new is not const, so the policy values are spelled with the
// const constructor: (lo, mid, hi, negative, scale).

/// Orders above this subtotal ship free ($75).
pub const FREE_SHIPPING_THRESHOLD: Decimal = Decimal::from_parts(75, 0, 0, false, 0);

/// Flat shipping fee charged at or below the free-shipping threshold ($8.99).
pub const FLAT_SHIPPING_FEE: Decimal = Decimal::from_parts(899, 0, 0, false, 2);

/// Sales tax rate applied to the subtotal (8%).
pub const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// One cart line: a product/color/quantity combination.
///
/// Line identity for deduplication is `(product_id, selected_color)` - the
/// same product in a different color is a distinct line. The product record
/// is denormalized at add-time so a line survives catalog changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: ProductId,
    pub product: Product,
    /// Always >= 1; a zero-quantity line is removed, never stored.
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_color: Option<String>,
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Price of this line (unit price times quantity), unrounded.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }

    /// Whether this line is the `(product, color)` variant given.
    #[must_use]
    pub fn is_variant(&self, product_id: &ProductId, selected_color: Option<&str>) -> bool {
        self.product_id == *product_id && self.selected_color.as_deref() == selected_color
    }
}

/// The full cart state: line items plus derived totals.
///
/// The derived fields (`total_items`, `subtotal`, `shipping`, `tax`,
/// `total`) must never be set independently of `items`; call
/// [`Cart::recompute`] after any change to the line list. This struct is
/// exactly the shape persisted to the local snapshot store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub items: Vec<CartItem>,
    pub total_items: u32,
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl Cart {
    /// An empty cart with all totals at zero.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Rebuild every derived field from the line items.
    ///
    /// Each field is rounded to cents independently from the exact subtotal
    /// (not from already-rounded intermediates), so repeated recomputation
    /// cannot drift. Note the shipping rule reads the subtotal alone: a cart
    /// emptied by removal still quotes the flat fee, and only an explicit
    /// clear resets shipping to zero.
    pub fn recompute(&mut self) {
        let subtotal: Decimal = self.items.iter().map(CartItem::line_total).sum();
        let shipping = if subtotal > FREE_SHIPPING_THRESHOLD {
            Decimal::ZERO
        } else {
            FLAT_SHIPPING_FEE
        };
        let tax = subtotal * TAX_RATE;

        self.total_items = self.items.iter().map(|item| item.quantity).sum();
        self.subtotal = round_to_cents(subtotal);
        self.shipping = round_to_cents(shipping);
        self.tax = round_to_cents(tax);
        self.total = round_to_cents(subtotal + shipping + tax);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::product::ProductCategory;

    fn product(id: &str, price: Decimal) -> Product {
        Product {
            id: ProductId::new(id),
            name: id.to_string(),
            description: String::new(),
            price,
            original_price: None,
            images: Vec::new(),
            category: ProductCategory::Earrings,
            materials: Vec::new(),
            colors: Vec::new(),
            in_stock: true,
            stock_quantity: 10,
            rating: 4.5,
            review_count: 3,
            featured: false,
            is_on_sale: false,
            tags: Vec::new(),
            specifications: std::collections::BTreeMap::new(),
        }
    }

    fn line(id: &str, price: Decimal, quantity: u32) -> CartItem {
        CartItem {
            product_id: ProductId::new(id),
            product: product(id, price),
            quantity,
            selected_color: None,
            added_at: Utc::now(),
        }
    }

    #[test]
    fn test_pricing_constants_encode_the_policy_values() {
        assert_eq!(FREE_SHIPPING_THRESHOLD, Decimal::new(75, 0));
        assert_eq!(FLAT_SHIPPING_FEE, Decimal::new(899, 2));
        assert_eq!(TAX_RATE, Decimal::new(8, 2));
    }

    #[test]
    fn test_totals_above_free_shipping_threshold() {
        let mut cart = Cart {
            items: vec![line("a", Decimal::new(80, 0), 1)],
            ..Cart::empty()
        };
        cart.recompute();

        assert_eq!(cart.total_items, 1);
        assert_eq!(cart.subtotal, Decimal::new(80, 0));
        assert_eq!(cart.shipping, Decimal::ZERO);
        assert_eq!(cart.tax, Decimal::new(640, 2));
        assert_eq!(cart.total, Decimal::new(8640, 2));
    }

    #[test]
    fn test_totals_below_free_shipping_threshold() {
        let mut cart = Cart {
            items: vec![line("a", Decimal::new(25, 0), 2)],
            ..Cart::empty()
        };
        cart.recompute();

        assert_eq!(cart.subtotal, Decimal::new(50, 0));
        assert_eq!(cart.shipping, FLAT_SHIPPING_FEE);
        assert_eq!(cart.tax, Decimal::new(400, 2));
        assert_eq!(cart.total, Decimal::new(6299, 2));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // Exactly $75 still pays the flat fee; free shipping starts above it.
        let mut cart = Cart {
            items: vec![line("a", Decimal::new(75, 0), 1)],
            ..Cart::empty()
        };
        cart.recompute();
        assert_eq!(cart.shipping, FLAT_SHIPPING_FEE);
    }

    #[test]
    fn test_recompute_on_empty_items_quotes_flat_shipping() {
        // Quirk preserved from the reducer: totals recomputed over zero
        // lines still quote the flat fee. Only an explicit clear zeroes it.
        let mut cart = Cart::empty();
        cart.recompute();

        assert_eq!(cart.subtotal, Decimal::ZERO);
        assert_eq!(cart.shipping, FLAT_SHIPPING_FEE);
        assert_eq!(cart.tax, Decimal::ZERO);
        assert_eq!(cart.total, FLAT_SHIPPING_FEE);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut cart = Cart {
            items: vec![
                line("a", Decimal::new(1999, 2), 3),
                line("b", Decimal::new(45, 0), 1),
            ],
            ..Cart::empty()
        };
        cart.recompute();
        let first = cart.clone();
        cart.recompute();
        assert_eq!(cart, first);
    }
}
