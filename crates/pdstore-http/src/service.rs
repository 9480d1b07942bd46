//! HTTP service implementing the hyper `Service` trait.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use hyper::body::Incoming;
use percent_encoding::percent_decode_str;
use tracing::{debug, error};

use pdstore_auth::CredentialProvider;
use pdstore_model::ProductStoreError;

use crate::body::ProductStoreResponseBody;
use crate::dispatch::{ProductStoreHandler, dispatch_operation};
use crate::response::{CONTENT_TYPE, error_to_response, unauthorized_response};
use crate::router::resolve_operation;

/// Configuration for the product store HTTP service.
#[derive(Clone)]
pub struct ProductStoreHttpConfig {
    /// Credential provider for signature validation.
    pub credential_provider: Arc<dyn CredentialProvider>,
}

impl std::fmt::Debug for ProductStoreHttpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductStoreHttpConfig")
            .field("credential_provider", &"...")
            .finish()
    }
}

/// Hyper `Service` implementation for the product store.
///
/// Authenticates every incoming request, then routes it to the wrapped
/// [`ProductStoreHandler`]. Rejected requests never reach the handler.
#[derive(Debug)]
pub struct ProductStoreHttpService<H: ProductStoreHandler> {
    handler: Arc<H>,
    config: Arc<ProductStoreHttpConfig>,
}

impl<H: ProductStoreHandler> ProductStoreHttpService<H> {
    /// Create a new `ProductStoreHttpService`.
    pub fn new(handler: Arc<H>, config: ProductStoreHttpConfig) -> Self {
        Self {
            handler,
            config: Arc::new(config),
        }
    }
}

impl<H: ProductStoreHandler> Clone for ProductStoreHttpService<H> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
            config: Arc::clone(&self.config),
        }
    }
}

impl<H: ProductStoreHandler> hyper::service::Service<http::Request<Incoming>>
    for ProductStoreHttpService<H>
{
    type Response = http::Response<ProductStoreResponseBody>;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: http::Request<Incoming>) -> Self::Future {
        let handler = Arc::clone(&self.handler);
        let config = Arc::clone(&self.config);
        let request_id = uuid::Uuid::new_v4().to_string();

        Box::pin(async move {
            // The only route is a GET; the request body is never read.
            let (parts, _incoming) = req.into_parts();
            let response = process_request(&parts, handler.as_ref(), &config).await;
            let response = add_common_headers(response, &request_id);
            Ok(response)
        })
    }
}

/// Process a single request through the full pipeline.
async fn process_request<H: ProductStoreHandler>(
    parts: &http::request::Parts,
    handler: &H,
    config: &ProductStoreHttpConfig,
) -> http::Response<ProductStoreResponseBody> {
    let path = parts.uri.path();
    debug!(method = %parts.method, path, "received request");
    // Error envelopes report the decoded path; signing and routing use the raw one.
    let location = percent_decode_str(path).decode_utf8_lossy();

    // 1. Authenticate before anything else.
    match pdstore_auth::verify_hmac(parts, config.credential_provider.as_ref()).await {
        Ok(auth) => debug!(user = %auth.user, "request authenticated"),
        Err(err) if err.is_rejection() => return unauthorized_response(),
        Err(err) => {
            error!(error = %err, "credential lookup failed");
            let err = ProductStoreError::internal_error("Internal Server Error");
            return error_to_response(&err, &location);
        }
    }

    // 2. Route.
    let op = match resolve_operation(&parts.method, path) {
        Ok(op) => op,
        Err(err) => return error_to_response(&err, &location),
    };

    // 3. Dispatch to handler.
    match dispatch_operation(handler, op).await {
        Ok(response) => response,
        Err(err) => error_to_response(&err, &location),
    }
}

/// Add common response headers to every response.
fn add_common_headers(
    mut response: http::Response<ProductStoreResponseBody>,
    request_id: &str,
) -> http::Response<ProductStoreResponseBody> {
    let headers = response.headers_mut();

    if let Ok(hv) = http::HeaderValue::from_str(request_id) {
        headers.entry("x-request-id").or_insert(hv);
    }

    headers
        .entry("content-type")
        .or_insert(http::HeaderValue::from_static(CONTENT_TYPE));

    headers.insert("server", http::HeaderValue::from_static("pdstore"));

    response
}
