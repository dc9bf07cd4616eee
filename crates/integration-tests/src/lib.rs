//! Integration tests for Earrings & Things.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p earrings-things-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_queries` - query engine and facet scenarios over the real
//!   fixture catalog
//! - `cart_ledger` - cart state machine scenarios, including persistence
//!   round trips through both store implementations
//!
//! Everything here runs in-process against the embedded fixtures; there is
//! no external service to start.

#![cfg_attr(not(test), forbid(unsafe_code))]
