//! Product store error types.
//!
//! Every non-authentication failure is rendered as the uniform JSON envelope
//! by the HTTP layer; the code determines the status. Authentication failures
//! never become a `ProductStoreError`.

use std::fmt;

/// Well-known product store error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ProductStoreErrorCode {
    /// The requested resource does not exist.
    NotFound,
    /// The route exists but not for this method.
    MethodNotAllowed,
    /// The request is malformed.
    #[default]
    ValidationError,
    /// Internal server error.
    InternalError,
}

impl ProductStoreErrorCode {
    /// Returns the short error code string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "NotFound",
            Self::MethodNotAllowed => "MethodNotAllowed",
            Self::ValidationError => "ValidationError",
            Self::InternalError => "InternalError",
        }
    }

    /// Returns the default HTTP status code for this error.
    #[must_use]
    pub fn default_status_code(&self) -> http::StatusCode {
        match self {
            Self::NotFound => http::StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => http::StatusCode::METHOD_NOT_ALLOWED,
            Self::ValidationError => http::StatusCode::UNPROCESSABLE_ENTITY,
            Self::InternalError => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the default message, the canonical reason phrase of the status.
    #[must_use]
    pub fn default_message(&self) -> &'static str {
        self.default_status_code()
            .canonical_reason()
            .unwrap_or("Error")
    }
}

impl fmt::Display for ProductStoreErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product store error response.
#[derive(Debug)]
pub struct ProductStoreError {
    /// The error code.
    pub code: ProductStoreErrorCode,
    /// A human-readable error message.
    pub message: String,
    /// The HTTP status code.
    pub status_code: http::StatusCode,
    /// The underlying source error, if any.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for ProductStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProductStoreError({}): {}", self.code, self.message)
    }
}

impl std::error::Error for ProductStoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl ProductStoreError {
    /// Create a new `ProductStoreError` from an error code.
    #[must_use]
    pub fn new(code: ProductStoreErrorCode) -> Self {
        Self::with_message(code, code.default_message())
    }

    /// Create a new `ProductStoreError` with a custom message.
    #[must_use]
    pub fn with_message(code: ProductStoreErrorCode, message: impl Into<String>) -> Self {
        Self {
            status_code: code.default_status_code(),
            message: message.into(),
            code,
            source: None,
        }
    }

    /// Attach an underlying source error.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Resource not found.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_message(ProductStoreErrorCode::NotFound, message)
    }

    /// Method not allowed on an existing route.
    #[must_use]
    pub fn method_not_allowed() -> Self {
        Self::new(ProductStoreErrorCode::MethodNotAllowed)
    }

    /// Validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::with_message(ProductStoreErrorCode::ValidationError, message)
    }

    /// Internal server error.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::with_message(ProductStoreErrorCode::InternalError, message)
    }
}
