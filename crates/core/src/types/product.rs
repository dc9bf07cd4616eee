//! Catalog product records.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;

/// A catalog product as supplied by the data-loading collaborator.
///
/// Products are immutable fixture data; the storefront never writes them.
/// `price` is always non-negative. When `is_on_sale` is set the catalog is
/// expected to carry an `original_price` greater than `price`, but the
/// source data does not enforce that, so neither do we.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    /// Image URLs, display order preserved.
    pub images: Vec<String>,
    pub category: ProductCategory,
    pub materials: Vec<String>,
    pub colors: Vec<String>,
    pub in_stock: bool,
    pub stock_quantity: u32,
    /// Average review rating, 0-5.
    pub rating: f32,
    pub review_count: u32,
    pub featured: bool,
    pub is_on_sale: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Free-form key/value details ("Chain Length", "Closure", ...).
    #[serde(default)]
    pub specifications: BTreeMap<String, String>,
}

/// The fixed set of catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Earrings,
    Necklaces,
    Bracelets,
    Rings,
}

impl ProductCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 4] = [Self::Earrings, Self::Necklaces, Self::Bracelets, Self::Rings];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Earrings => "earrings",
            Self::Necklaces => "necklaces",
            Self::Bracelets => "bracelets",
            Self::Rings => "rings",
        }
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProductCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "earrings" => Ok(Self::Earrings),
            "necklaces" => Ok(Self::Necklaces),
            "bracelets" => Ok(Self::Bracelets),
            "rings" => Ok(Self::Rings),
            _ => Err(format!("invalid product category: {s}")),
        }
    }
}
