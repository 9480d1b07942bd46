//! In-memory product repository.

use async_trait::async_trait;
use dashmap::DashMap;
use pdstore_model::Product;

use super::ProductRepository;
use crate::error::CoreResult;

/// A product repository held in a concurrent map. Contents live for the process lifetime.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: DashMap<String, Product>,
}

impl InMemoryProductRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every product.
    pub fn clear(&self) {
        self.products.clear();
    }

    /// Number of stored products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_by_barcode(&self, barcode: &str) -> CoreResult<Option<Product>> {
        Ok(self.products.get(barcode).map(|r| r.value().clone()))
    }

    async fn add_product(&self, product: Product) -> CoreResult<()> {
        self.products.insert(product.id.clone(), product);
        Ok(())
    }
}
