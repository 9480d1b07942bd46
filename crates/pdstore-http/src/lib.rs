//! Product detail store HTTP service layer.
//!
//! - **Authentication**: every request is HMAC-verified before routing
//! - **Router**: maps `GET /products/{barcode}` to an operation
//! - **Handler trait**: defines the boundary between HTTP and business logic
//! - **Service**: hyper `Service` implementation tying the pipeline together
//! - **Response helpers**: JSON success, error-envelope and `401` formatting
#![allow(missing_docs)]

pub mod body;
pub mod dispatch;
pub mod response;
pub mod router;
pub mod service;

pub use body::ProductStoreResponseBody;
pub use dispatch::ProductStoreHandler;
pub use service::{ProductStoreHttpConfig, ProductStoreHttpService};
