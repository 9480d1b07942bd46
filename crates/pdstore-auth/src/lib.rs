//! HMAC request-signing authentication for the product detail store.
//!
//! Every protected request carries three headers:
//!
//! ```text
//! Authorization-Time: 1700000000
//! Authorization-User: test-user
//! Authorization: HMAC <base64(HMAC-SHA256(secret, string_to_sign))>
//! ```
//!
//! The string to sign is built from the request method, the request path and
//! the two `Authorization-*` headers (see [`canonical`]). Verification resolves
//! the user's shared secret through a [`CredentialProvider`], recomputes the
//! signature and compares it in constant time.
//!
//! # Usage
//!
//! ```rust
//! use pdstore_auth::canonical::build_string_to_sign;
//! use pdstore_auth::signature::sign_request;
//!
//! let sts = build_string_to_sign("get", "/products/1", "1700000000", "test-user");
//! assert!(sts.starts_with("GET /products/1\n"));
//!
//! let header = sign_request("mock", "GET", "/products/1", "1700000000", "test-user");
//! assert!(header.starts_with("HMAC "));
//! ```
//!
//! # Modules
//!
//! - [`canonical`] - String-to-sign construction
//! - [`context`] - Extraction of the signed claims from request headers
//! - [`credentials`] - Credential provider trait and in-memory implementation
//! - [`error`] - Authentication error types
//! - [`signature`] - Signature computation and request verification

pub mod canonical;
pub mod context;
pub mod credentials;
pub mod error;
pub mod signature;

pub use context::AuthContext;
pub use credentials::{CredentialProvider, StaticCredentialProvider};
pub use error::AuthError;
pub use signature::{AuthResult, MAX_CLOCK_SKEW_SECS, sign_request, verify_hmac, verify_hmac_at};
