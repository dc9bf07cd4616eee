//! Product review records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::id::{ProductId, ReviewId, UserId};

/// A customer review, keyed to a product.
///
/// Reviews are read-only in this system: the submission form in the UI does
/// not persist anywhere, so the storefront only ever displays them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub user_id: UserId,
    pub user_name: String,
    /// Star rating, 1-5.
    pub rating: u8,
    pub title: String,
    pub content: String,
    /// Helpful-vote count.
    pub helpful: u32,
    /// Verified-purchase flag.
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub images: Vec<String>,
}
