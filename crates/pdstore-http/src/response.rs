//! Response serialization and error formatting.

use pdstore_model::ProductStoreError;

use crate::body::ProductStoreResponseBody;

/// Content type for all JSON responses.
pub const CONTENT_TYPE: &str = "application/json";

/// Serialize an error into the uniform JSON envelope.
///
/// ```json
/// {
///   "code": 404,
///   "errors": {"location": "/products/123", "message": "Could not find product with barcode \"123\""},
///   "message": "Could not find product with barcode \"123\""
/// }
/// ```
#[must_use]
pub fn error_to_json(error: &ProductStoreError, location: &str) -> Vec<u8> {
    serde_json::to_vec(&serde_json::json!({
        "code": error.status_code.as_u16(),
        "errors": {
            "location": location,
            "message": error.message,
        },
        "message": error.message,
    }))
    .expect("JSON serialization of error cannot fail")
}

/// Convert a `ProductStoreError` into a complete HTTP error response.
#[must_use]
pub fn error_to_response(
    error: &ProductStoreError,
    location: &str,
) -> http::Response<ProductStoreResponseBody> {
    let body = ProductStoreResponseBody::from_json(error_to_json(error, location));

    http::Response::builder()
        .status(error.status_code)
        .header("content-type", CONTENT_TYPE)
        .body(body)
        .expect("valid error response")
}

/// Build the `401` response for a failed authentication.
///
/// The body is always `{"error": "Unauthorized"}` regardless of which check
/// failed, and deliberately does not use the error envelope.
#[must_use]
pub fn unauthorized_response() -> http::Response<ProductStoreResponseBody> {
    let json = serde_json::to_vec(&serde_json::json!({ "error": "Unauthorized" }))
        .expect("JSON serialization of error cannot fail");

    http::Response::builder()
        .status(http::StatusCode::UNAUTHORIZED)
        .header("content-type", CONTENT_TYPE)
        .body(ProductStoreResponseBody::from_json(json))
        .expect("valid unauthorized response")
}

/// Build a success response from JSON bytes.
#[must_use]
pub fn json_response(json: Vec<u8>) -> http::Response<ProductStoreResponseBody> {
    http::Response::builder()
        .status(http::StatusCode::OK)
        .header("content-type", CONTENT_TYPE)
        .body(ProductStoreResponseBody::from_json(json))
        .expect("valid JSON response")
}
