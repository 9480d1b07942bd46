//! Product store business logic.

use pdstore_model::{GetProductInput, Product, ProductStoreError};
use tracing::{debug, error};

use crate::context::ServiceContext;

/// Implements every product store operation on top of a [`ServiceContext`].
#[derive(Debug, Clone)]
pub struct ProductStoreProvider {
    context: ServiceContext,
}

impl ProductStoreProvider {
    /// Create a provider over the given context.
    #[must_use]
    pub fn new(context: ServiceContext) -> Self {
        Self { context }
    }

    /// The dependency context.
    #[must_use]
    pub fn context(&self) -> &ServiceContext {
        &self.context
    }

    /// Look up a product by barcode.
    ///
    /// # Errors
    ///
    /// Returns a `NotFound` error for an unknown barcode, or an internal error
    /// if the repository fails.
    pub async fn handle_get_product(
        &self,
        input: GetProductInput,
    ) -> Result<Product, ProductStoreError> {
        let found = self
            .context
            .products()
            .get_by_barcode(&input.barcode)
            .await
            .map_err(|e| {
                error!(barcode = %input.barcode, error = %e, "product lookup failed");
                ProductStoreError::internal_error("Internal Server Error").with_source(e)
            })?;

        found.ok_or_else(|| {
            debug!(barcode = %input.barcode, "product not found");
            ProductStoreError::not_found(format!(
                "Could not find product with barcode \"{}\"",
                input.barcode
            ))
        })
    }
}
