//! The catalog query engine: filter specification, sort keys, and `apply`.
//!
//! `apply` is a pure function of `(products, filter, sort)` and is cheap
//! enough to re-run on every UI change at catalog sizes in the tens of
//! items; callers hold no query state between calls.

use earrings_things_core::{Product, ProductCategory};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An inclusive price band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceRange {
    #[must_use]
    pub const fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    /// Whether `price` falls within the band, bounds inclusive.
    #[must_use]
    pub fn contains(&self, price: Decimal) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    /// The unrestricted band.
    fn default() -> Self {
        Self {
            min: Decimal::ZERO,
            max: Decimal::MAX,
        }
    }
}

/// The filter selections owned by the UI.
///
/// An empty selection list means "no restriction" for that facet. Within a
/// facet the match is OR (any selected value), across facets it is AND.
/// The UI rebuilds the whole spec on every change; `FilterSpec::default()`
/// is the "clear all" state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    pub categories: Vec<ProductCategory>,
    pub price_range: PriceRange,
    pub materials: Vec<String>,
    pub colors: Vec<String>,
    pub in_stock: bool,
    pub on_sale: bool,
}

impl FilterSpec {
    /// Whether `product` satisfies every active predicate.
    ///
    /// Predicates are checked in a fixed order (categories, materials,
    /// colors, price, stock, sale) so failures are deterministic.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if !self.categories.is_empty() && !self.categories.contains(&product.category) {
            return false;
        }
        if !self.materials.is_empty()
            && !product
                .materials
                .iter()
                .any(|material| self.materials.contains(material))
        {
            return false;
        }
        if !self.colors.is_empty()
            && !product.colors.iter().any(|color| self.colors.contains(color))
        {
            return false;
        }
        if !self.price_range.contains(product.price) {
            return false;
        }
        if self.in_stock && !product.in_stock {
            return false;
        }
        if self.on_sale && !product.is_on_sale {
            return false;
        }
        true
    }
}

/// How to order the surviving products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    /// Keep catalog order. The catalog carries no creation timestamp, so
    /// "newest" is the stable identity ordering.
    #[default]
    #[serde(rename = "newest")]
    Newest,
    #[serde(rename = "price-low")]
    PriceAscending,
    #[serde(rename = "price-high")]
    PriceDescending,
    #[serde(rename = "rating")]
    RatingDescending,
    /// Most-reviewed first.
    #[serde(rename = "popular")]
    PopularityDescending,
}

impl SortKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceAscending => "price-low",
            Self::PriceDescending => "price-high",
            Self::RatingDescending => "rating",
            Self::PopularityDescending => "popular",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Self::Newest),
            "price-low" => Ok(Self::PriceAscending),
            "price-high" => Ok(Self::PriceDescending),
            "rating" => Ok(Self::RatingDescending),
            "popular" => Ok(Self::PopularityDescending),
            _ => Err(format!("invalid sort key: {s}")),
        }
    }
}

/// Produce the visible product list for a filter/sort selection.
///
/// Pure and total: never fails, returns an empty list when nothing matches,
/// and leaves `products` untouched. Sorting is stable, so ties (and the
/// `newest` key) preserve original catalog order.
#[must_use]
pub fn apply(products: &[Product], filter: &FilterSpec, sort: SortKey) -> Vec<Product> {
    let mut matched: Vec<Product> = products
        .iter()
        .filter(|product| filter.matches(product))
        .cloned()
        .collect();

    match sort {
        SortKey::Newest => {}
        SortKey::PriceAscending => matched.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDescending => matched.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::RatingDescending => matched.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::PopularityDescending => {
            matched.sort_by(|a, b| b.review_count.cmp(&a.review_count));
        }
    }

    matched
}
