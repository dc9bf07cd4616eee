//! Earrings & Things storefront core.
//!
//! This crate is the logical core of the storefront, kept free of any
//! rendering or transport concerns so UI layers can call straight into it:
//!
//! - [`catalog`] - the catalog query engine: filter/sort over the product
//!   set plus the facet enumerations the filter sidebar needs
//! - [`cart`] - the cart ledger: add/remove/set-quantity/clear with derived
//!   totals, persisted best-effort through an injected store
//! - [`content`] - fixture catalog loader
//! - [`config`], [`state`], [`error`] - wiring shared by embedders

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod state;
