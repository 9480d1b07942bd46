//! Product detail store model types.
//!
//! Hand-written serde types for the product record, the supported operations
//! and the error taxonomy shared by the HTTP and core crates.
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod input;
pub mod operations;
pub mod product;

pub use error::{ProductStoreError, ProductStoreErrorCode};
pub use input::GetProductInput;
pub use operations::ProductStoreOperation;
pub use product::Product;
