//! Error types for the product store core.

/// Core error type for configuration and repository failures.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A repository backend could not serve the request.
    #[error("repository backend error: {0}")]
    Backend(String),
}

/// Convenience result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
