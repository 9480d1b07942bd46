//! Error types for HMAC authentication.
//!
//! The variants exist for logging and tests. Callers collapse every variant
//! except [`AuthError::CredentialStore`] into a single `401 Unauthorized`.

/// Errors that can occur during request authentication.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// `Authorization-Time` is missing, empty, or not a plain decimal integer.
    #[error("Invalid or missing Authorization-Time header")]
    InvalidTimestamp,

    /// The claimed time is outside the allowed clock skew.
    #[error("Request time is outside the allowed window ({skew_secs}s skew)")]
    RequestExpired {
        /// Absolute difference between the claimed time and now.
        skew_secs: u64,
    },

    /// `Authorization-User` is missing or empty.
    #[error("Missing Authorization-User header")]
    MissingUser,

    /// The provided signature does not match, or no credential was found.
    #[error("Signature does not match")]
    SignatureDoesNotMatch,

    /// The credential store could not be queried.
    #[error("Credential store unavailable: {0}")]
    CredentialStore(String),
}

impl AuthError {
    /// Whether this error is an expected rejection rather than an internal fault.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        !matches!(self, Self::CredentialStore(_))
    }
}
