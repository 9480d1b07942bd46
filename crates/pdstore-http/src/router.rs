//! Request router.
//!
//! The only route is `GET /products/{barcode}`, where `{barcode}` is a single
//! non-empty, percent-decoded path segment. Routing runs after authentication.

use percent_encoding::percent_decode_str;

use pdstore_model::{GetProductInput, ProductStoreError, ProductStoreOperation};

/// Path prefix of the product resource.
const PRODUCTS_PREFIX: &str = "/products/";

/// Resolve an operation from the request method and path.
///
/// # Errors
///
/// Returns `NotFound` for unknown paths, `MethodNotAllowed` for a known path
/// with the wrong method, and `ValidationError` for a barcode that is not
/// valid UTF-8 once decoded.
pub fn resolve_operation(
    method: &http::Method,
    path: &str,
) -> Result<ProductStoreOperation, ProductStoreError> {
    let segment = path
        .strip_prefix(PRODUCTS_PREFIX)
        .filter(|s| !s.is_empty() && !s.contains('/'))
        .ok_or_else(|| ProductStoreError::not_found("Not Found"))?;

    if *method != http::Method::GET {
        return Err(ProductStoreError::method_not_allowed());
    }

    let barcode = percent_decode_str(segment)
        .decode_utf8()
        .map_err(|_| ProductStoreError::validation("Barcode is not valid UTF-8"))?;

    Ok(ProductStoreOperation::GetProduct(GetProductInput {
        barcode: barcode.into_owned(),
    }))
}
