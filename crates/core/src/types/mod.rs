//! Core types for Earrings & Things.
//!
//! This module provides type-safe wrappers and records for the storefront
//! domain.

pub mod cart;
pub mod id;
pub mod order;
pub mod price;
pub mod product;
pub mod review;

pub use cart::{Cart, CartItem, FLAT_SHIPPING_FEE, FREE_SHIPPING_THRESHOLD, TAX_RATE};
pub use id::*;
pub use order::{Address, AddressKind, Order, OrderStatus, User};
pub use price::{format_usd, round_to_cents};
pub use product::{Product, ProductCategory};
pub use review::Review;
