//! Product store handler trait and operation dispatch.

use std::future::Future;
use std::pin::Pin;

use pdstore_model::{ProductStoreError, ProductStoreOperation};

use crate::body::ProductStoreResponseBody;

/// Trait that the product store business logic must implement.
///
/// The handler receives an already authenticated and routed operation and
/// returns a complete HTTP response. This trait is the boundary between the
/// HTTP transport layer and the business logic layer.
pub trait ProductStoreHandler: Send + Sync + 'static {
    /// Handle an operation and produce an HTTP response.
    fn handle_operation(
        &self,
        op: ProductStoreOperation,
    ) -> Pin<
        Box<
            dyn Future<Output = Result<http::Response<ProductStoreResponseBody>, ProductStoreError>>
                + Send,
        >,
    >;
}

/// Dispatch an operation to the handler.
pub async fn dispatch_operation<H: ProductStoreHandler>(
    handler: &H,
    op: ProductStoreOperation,
) -> Result<http::Response<ProductStoreResponseBody>, ProductStoreError> {
    tracing::debug!(operation = %op, "dispatching product store operation");
    handler.handle_operation(op).await
}
