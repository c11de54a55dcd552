//! Removal of repeated product variants.
//!
//! Listings repeat products across pages; two records are the same variant
//! when title, price and color all match.

use std::collections::HashSet;

use crate::product::Product;

/// Keep the first product of each (title, price, color), in input order.
///
/// Prices are compared by bit pattern, so `0.1 + 0.2` and `0.3` are
/// different prices.
#[must_use]
pub fn dedupe(products: Vec<Product>) -> Vec<Product> {
    let mut seen: HashSet<(String, u64, String)> = HashSet::with_capacity(products.len());
    let before = products.len();

    let unique: Vec<Product> = products
        .into_iter()
        .filter(|p| seen.insert((p.title.clone(), p.price.to_bits(), p.color.clone())))
        .collect();

    if unique.len() < before {
        tracing::debug!(removed = before - unique.len(), "removed duplicate products");
    }
    unique
}
