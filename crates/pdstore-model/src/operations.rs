//! Product store operation enum.

use std::fmt;

use crate::input::GetProductInput;

/// All supported product store operations, with their routed inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductStoreOperation {
    /// Look up a product by barcode (`GET /products/{barcode}`).
    GetProduct(GetProductInput),
}

impl ProductStoreOperation {
    /// Returns the operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetProduct(_) => "GetProduct",
        }
    }
}

impl fmt::Display for ProductStoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
