//! Operation inputs.

/// Input for the `GetProduct` operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetProductInput {
    /// The barcode taken from the request path.
    pub barcode: String,
}
