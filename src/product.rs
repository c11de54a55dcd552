//! The output record.

use serde::{Deserialize, Serialize};

/// One purchasable variant of a listed product.
///
/// Serializes with the output key names and order:
/// `title, price, imageUrl, capacityMB, availabilityText, isAvailable,
/// shippingText, shippingDate, color`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product name with its display capacity appended.
    pub title: String,
    pub price: f64,
    pub image_url: String,
    #[serde(rename = "capacityMB")]
    pub capacity_mb: f64,
    pub availability_text: String,
    pub is_available: bool,
    pub shipping_text: String,
    /// `YYYY-MM-DD`, or empty when no date could be read.
    pub shipping_date: String,
    pub color: String,
}
