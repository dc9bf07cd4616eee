//! Earrings & Things Core - Shared types library.
//!
//! This crate provides the common types used across all Earrings & Things
//! components:
//! - `storefront` - Catalog query engine and cart ledger
//! - future surfaces (admin tooling, sync jobs) share the same records
//!
//! # Architecture
//!
//! The core crate contains only types and pure computations - no I/O, no
//! storage access, no HTTP clients. This keeps it lightweight and allows it
//! to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, money helpers, and the product/review/cart
//!   domain records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
