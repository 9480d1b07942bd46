//! Extraction of the signed claims from an inbound request.

use crate::canonical::{AUTH_TIME_HEADER, AUTH_USER_HEADER};

/// The only `Authorization` scheme accepted.
pub const AUTH_SCHEME_PREFIX: &str = "HMAC ";

/// The per-request authentication claims, read from the request line and headers.
///
/// Built once per request and dropped after the authentication decision.
/// Header values that are not visible ASCII are treated as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// The request method, as received.
    pub method: String,
    /// The request path, without the query string.
    pub path: String,
    /// Raw `Authorization-Time` header value.
    pub claimed_time: Option<String>,
    /// Raw `Authorization-User` header value.
    pub claimed_user: Option<String>,
    /// Raw `Authorization` header value, including the scheme.
    pub authorization: Option<String>,
}

impl AuthContext {
    /// Read the claims from the request parts.
    #[must_use]
    pub fn from_parts(parts: &http::request::Parts) -> Self {
        Self {
            method: parts.method.as_str().to_owned(),
            path: parts.uri.path().to_owned(),
            claimed_time: header_value(&parts.headers, AUTH_TIME_HEADER),
            claimed_user: header_value(&parts.headers, AUTH_USER_HEADER),
            authorization: header_value(&parts.headers, http::header::AUTHORIZATION.as_str()),
        }
    }

    /// The base64 signature following the `HMAC ` scheme prefix.
    ///
    /// Returns `None` when the header is missing or uses another scheme.
    #[must_use]
    pub fn provided_signature(&self) -> Option<&str> {
        self.authorization
            .as_deref()
            .and_then(|v| v.strip_prefix(AUTH_SCHEME_PREFIX))
    }
}

fn header_value(headers: &http::HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned)
}
