//! String-to-sign construction.
//!
//! The signed message is exactly three lines joined by `\n`, with no trailing
//! newline:
//!
//! ```text
//! <METHOD> <PATH>
//! Authorization-Time: <time>
//! Authorization-User: <user>
//! ```
//!
//! Signer and verifier must produce byte-identical output, so nothing here is
//! normalized beyond upper-casing the method.

/// Header carrying the claimed Unix timestamp (seconds).
pub const AUTH_TIME_HEADER: &str = "authorization-time";

/// Header carrying the claimed user identifier.
pub const AUTH_USER_HEADER: &str = "authorization-user";

/// Build the string to sign for a request.
///
/// `path` is used exactly as received and must not include the query string.
///
/// # Examples
///
/// ```
/// use pdstore_auth::canonical::build_string_to_sign;
///
/// let sts = build_string_to_sign("GET", "/products/1234567890123", "1700000000", "test-user");
/// assert_eq!(
///     sts,
///     "GET /products/1234567890123\nAuthorization-Time: 1700000000\nAuthorization-User: test-user"
/// );
/// ```
#[must_use]
pub fn build_string_to_sign(method: &str, path: &str, time: &str, user: &str) -> String {
    let method = method.to_ascii_uppercase();
    format!("{method} {path}\nAuthorization-Time: {time}\nAuthorization-User: {user}")
}
