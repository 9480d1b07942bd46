//! Repository traits and in-memory implementations.
//!
//! Products are looked up through [`ProductRepository`]. User credentials are
//! resolved through [`pdstore_auth::CredentialProvider`], which
//! [`InMemoryUserRepository`] implements.

mod product;
mod user;

use async_trait::async_trait;
use pdstore_model::Product;

use crate::error::CoreResult;

pub use product::InMemoryProductRepository;
pub use user::InMemoryUserRepository;

/// Storage for product records, keyed by barcode.
///
/// Implementations must be safe for concurrent use.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Look up a product by its barcode. An unknown barcode is `Ok(None)`.
    async fn get_by_barcode(&self, barcode: &str) -> CoreResult<Option<Product>>;

    /// Insert or replace a product, keyed by `product.id`.
    async fn add_product(&self, product: Product) -> CoreResult<()>;
}
