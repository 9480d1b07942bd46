//! The product record.

use serde::{Deserialize, Serialize};

/// A product, keyed by its barcode (`id`).
///
/// Serialized as `{"id": ..., "name": ..., "price": ..., "currency": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// The barcode identifying the product.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Unit price in `currency`.
    pub price: f64,
    /// ISO 4217 currency code.
    pub currency: String,
}

impl Product {
    /// Create a new product.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            currency: currency.into(),
        }
    }
}
