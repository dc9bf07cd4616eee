//! Catalog store and query engine.
//!
//! [`Catalog`] holds the static product and review sets in memory and
//! answers the read-only questions the UI asks: full queries through
//! [`query::apply`], plus the facet enumerations (categories, materials,
//! colors, price bounds) that populate the filter sidebar. Facets are
//! derived once at construction; the catalog never changes during a
//! session.

pub mod query;

pub use query::{FilterSpec, PriceRange, SortKey, apply};

use std::sync::Arc;

use earrings_things_core::{Product, ProductCategory, ProductId, Review};

/// In-memory catalog store.
///
/// Cheaply cloneable: the product and review sets are shared behind `Arc`.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<Vec<Product>>,
    reviews: Arc<Vec<Review>>,
    materials: Arc<Vec<String>>,
    colors: Arc<Vec<String>>,
    price_bounds: Option<PriceRange>,
}

impl Catalog {
    /// Build a catalog and derive its facets.
    #[must_use]
    pub fn new(products: Vec<Product>, reviews: Vec<Review>) -> Self {
        let materials = distinct_sorted(products.iter().flat_map(|p| p.materials.iter()));
        let colors = distinct_sorted(products.iter().flat_map(|p| p.colors.iter()));
        let price_bounds = price_bounds(&products);

        Self {
            products: Arc::new(products),
            reviews: Arc::new(reviews),
            materials: Arc::new(materials),
            colors: Arc::new(colors),
            price_bounds,
        }
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a single product.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == *id)
    }

    /// Products flagged for the featured collections row.
    #[must_use]
    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// Products currently on sale.
    #[must_use]
    pub fn on_sale(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_on_sale).collect()
    }

    /// Products in one category, in catalog order.
    #[must_use]
    pub fn by_category(&self, category: ProductCategory) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Reviews for one product, in fixture order.
    #[must_use]
    pub fn reviews_for(&self, product_id: &ProductId) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|review| review.product_id == *product_id)
            .collect()
    }

    /// The fixed category list.
    #[must_use]
    pub const fn categories() -> [ProductCategory; 4] {
        ProductCategory::ALL
    }

    /// Distinct material labels across the catalog, lexicographic.
    #[must_use]
    pub fn materials(&self) -> &[String] {
        &self.materials
    }

    /// Distinct color labels across the catalog, lexicographic.
    #[must_use]
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Cheapest and most expensive catalog prices, `None` when empty.
    #[must_use]
    pub const fn price_bounds(&self) -> Option<PriceRange> {
        self.price_bounds
    }

    /// Run the query engine over the full product set.
    #[must_use]
    pub fn query(&self, filter: &FilterSpec, sort: SortKey) -> Vec<Product> {
        query::apply(&self.products, filter, sort)
    }
}

fn distinct_sorted<'a>(labels: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut distinct: Vec<String> = labels.cloned().collect();
    distinct.sort();
    distinct.dedup();
    distinct
}

fn price_bounds(products: &[Product]) -> Option<PriceRange> {
    let min = products.iter().map(|p| p.price).min()?;
    let max = products.iter().map(|p| p.price).max()?;
    Some(PriceRange::new(min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(id: &str, category: ProductCategory, price: i64, materials: &[&str]) -> Product {
        Product {
            id: ProductId::new(id),
            name: id.to_string(),
            description: String::new(),
            price: Decimal::new(price, 0),
            original_price: None,
            images: Vec::new(),
            category,
            materials: materials.iter().map(ToString::to_string).collect(),
            colors: vec!["Silver".to_string()],
            in_stock: true,
            stock_quantity: 5,
            rating: 4.5,
            review_count: 10,
            featured: id.starts_with("featured"),
            is_on_sale: false,
            tags: Vec::new(),
            specifications: std::collections::BTreeMap::new(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                product("featured-hoops", ProductCategory::Earrings, 92, &["Rose Gold Fill"]),
                product("studs", ProductCategory::Earrings, 45, &["Sterling Silver"]),
                product("cuff", ProductCategory::Bracelets, 89, &["Copper", "Sterling Silver"]),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn test_facets_are_distinct_and_sorted() {
        let catalog = catalog();
        assert_eq!(
            catalog.materials(),
            ["Copper", "Rose Gold Fill", "Sterling Silver"]
        );
        assert_eq!(catalog.colors(), ["Silver"]);
    }

    #[test]
    fn test_price_bounds() {
        let catalog = catalog();
        let bounds = catalog.price_bounds().expect("bounds");
        assert_eq!(bounds.min, Decimal::new(45, 0));
        assert_eq!(bounds.max, Decimal::new(92, 0));

        let empty = Catalog::new(Vec::new(), Vec::new());
        assert!(empty.price_bounds().is_none());
    }

    #[test]
    fn test_lookup_and_category_listing() {
        let catalog = catalog();
        assert!(catalog.product(&ProductId::new("cuff")).is_some());
        assert!(catalog.product(&ProductId::new("tiara")).is_none());

        let earrings = catalog.by_category(ProductCategory::Earrings);
        assert_eq!(earrings.len(), 2);
        assert_eq!(catalog.featured().len(), 1);
    }
}
