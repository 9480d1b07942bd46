//! Handler bridging the HTTP layer to the product store provider.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use pdstore_http::body::ProductStoreResponseBody;
use pdstore_http::dispatch::ProductStoreHandler;
use pdstore_http::response::json_response;
use pdstore_model::{ProductStoreError, ProductStoreOperation};

use crate::provider::ProductStoreProvider;

/// Handler that bridges the HTTP layer to the [`ProductStoreProvider`].
#[derive(Debug, Clone)]
pub struct ProductStoreCoreHandler {
    provider: Arc<ProductStoreProvider>,
}

impl ProductStoreCoreHandler {
    /// Create a new handler wrapping a provider.
    #[must_use]
    pub fn new(provider: Arc<ProductStoreProvider>) -> Self {
        Self { provider }
    }
}

impl ProductStoreHandler for ProductStoreCoreHandler {
    fn handle_operation(
        &self,
        op: ProductStoreOperation,
    ) -> Pin<
        Box<
            dyn Future<Output = Result<http::Response<ProductStoreResponseBody>, ProductStoreError>>
                + Send,
        >,
    > {
        let provider = Arc::clone(&self.provider);
        Box::pin(async move { dispatch(provider.as_ref(), op).await })
    }
}

/// Dispatch an operation to the matching provider method.
async fn dispatch(
    provider: &ProductStoreProvider,
    op: ProductStoreOperation,
) -> Result<http::Response<ProductStoreResponseBody>, ProductStoreError> {
    match op {
        ProductStoreOperation::GetProduct(input) => {
            let output = provider.handle_get_product(input).await?;
            serialize(&output)
        }
    }
}

/// Serialize an output type into a JSON HTTP response.
fn serialize<T: serde::Serialize>(
    output: &T,
) -> Result<http::Response<ProductStoreResponseBody>, ProductStoreError> {
    let json = serde_json::to_vec(output).map_err(|e| {
        ProductStoreError::internal_error(format!("Failed to serialize response: {e}"))
    })?;
    Ok(json_response(json))
}
