//! Fixture catalog content.
//!
//! The product and review sets ship as JSON embedded at compile time and
//! are parsed once at startup. In a real deployment this loader would be
//! replaced by a remote fetch without changing the [`Catalog`] contract.

use earrings_things_core::{Product, Review};
use thiserror::Error;

use crate::catalog::Catalog;

const PRODUCTS_JSON: &str = include_str!("../data/products.json");
const REVIEWS_JSON: &str = include_str!("../data/reviews.json");

/// Errors loading fixture content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse {name}: {source}")]
    Parse {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Load the embedded catalog fixtures.
///
/// # Errors
///
/// Returns an error if the embedded JSON does not match the expected shape;
/// that is a build defect, not a runtime condition.
pub fn load_catalog() -> Result<Catalog, ContentError> {
    let products: Vec<Product> =
        serde_json::from_str(PRODUCTS_JSON).map_err(|source| ContentError::Parse {
            name: "products.json",
            source,
        })?;
    let reviews: Vec<Review> =
        serde_json::from_str(REVIEWS_JSON).map_err(|source| ContentError::Parse {
            name: "reviews.json",
            source,
        })?;

    tracing::info!(
        products = products.len(),
        reviews = reviews.len(),
        "loaded catalog fixtures"
    );
    Ok(Catalog::new(products, reviews))
}
