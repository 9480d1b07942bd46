//! HMAC signature computation and request verification.
//!
//! Verification runs these steps in order:
//!
//! 1. Parse `Authorization-Time` and reject it if it is not a plain decimal
//!    integer or lies more than [`MAX_CLOCK_SKEW_SECS`] away from now.
//! 2. Reject a missing or empty `Authorization-User`.
//! 3. Resolve the user's secret through the [`CredentialProvider`].
//! 4. Build the string to sign and compute `Base64(HMAC-SHA256(secret, sts))`.
//! 5. Compare it to the signature after the `HMAC ` prefix in constant time.
//!
//! An unknown user does not short-circuit: the signature is still computed
//! (with [`UNKNOWN_USER_KEY`]) and compared, and the outcome is masked with a
//! constant-time "credential found" flag. Unknown users and bad signatures
//! therefore take the same path and produce the same error.
//!
//! The main entry point is [`verify_hmac`].

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, KeyInit, Mac};
use sha2::Sha256;
use subtle::{Choice, ConstantTimeEq};
use tracing::debug;

use crate::canonical::build_string_to_sign;
use crate::context::{AUTH_SCHEME_PREFIX, AuthContext};
use crate::credentials::CredentialProvider;
use crate::error::AuthError;

/// Maximum allowed distance, in seconds, between the claimed time and now.
pub const MAX_CLOCK_SKEW_SECS: u64 = 300;

/// Key used to compute a throwaway signature when the user has no credential.
pub const UNKNOWN_USER_KEY: &[u8] = b"pdstore-unknown-user";

type HmacSha256 = Hmac<Sha256>;

/// The result of a successful verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResult {
    /// The user that signed the request.
    pub user: String,
}

/// Compute `Base64(HMAC-SHA256(key, string_to_sign))`.
///
/// # Examples
///
/// ```
/// use pdstore_auth::signature::compute_signature;
///
/// let sig = compute_signature(b"mock", "GET /products/1\nAuthorization-Time: 1\nAuthorization-User: u");
/// assert_eq!(sig.len(), 44);
/// ```
#[must_use]
pub fn compute_signature(key: &[u8], string_to_sign: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can accept keys of any length");
    mac.update(string_to_sign.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}

/// Format a signature as an `Authorization` header value.
#[must_use]
pub fn authorization_header_value(signature: &str) -> String {
    format!("{AUTH_SCHEME_PREFIX}{signature}")
}

/// Sign a request on the client side and return the `Authorization` header value.
#[must_use]
pub fn sign_request(secret: &str, method: &str, path: &str, time: &str, user: &str) -> String {
    let string_to_sign = build_string_to_sign(method, path, time, user);
    authorization_header_value(&compute_signature(secret.as_bytes(), &string_to_sign))
}

/// Verify an HMAC-signed request against the current wall-clock time.
///
/// # Errors
///
/// Returns an [`AuthError`] if the request is stale, unsigned, signed by an
/// unknown user, carries a wrong signature, or the credential store fails.
pub async fn verify_hmac(
    parts: &http::request::Parts,
    credential_provider: &dyn CredentialProvider,
) -> Result<AuthResult, AuthError> {
    verify_hmac_at(parts, credential_provider, chrono::Utc::now().timestamp()).await
}

/// Verify an HMAC-signed request as if the current time were `now` (Unix seconds).
///
/// # Errors
///
/// See [`verify_hmac`].
pub async fn verify_hmac_at(
    parts: &http::request::Parts,
    credential_provider: &dyn CredentialProvider,
    now: i64,
) -> Result<AuthResult, AuthError> {
    let ctx = AuthContext::from_parts(parts);
    verify_context(&ctx, credential_provider, now).await
}

/// Verify already-extracted claims as if the current time were `now`.
///
/// # Errors
///
/// See [`verify_hmac`].
pub async fn verify_context(
    ctx: &AuthContext,
    credential_provider: &dyn CredentialProvider,
    now: i64,
) -> Result<AuthResult, AuthError> {
    let time = ctx.claimed_time.as_deref().unwrap_or_default();
    let claimed_time = parse_timestamp(time).ok_or_else(|| {
        debug!(path = %ctx.path, "Rejecting request with invalid Authorization-Time");
        AuthError::InvalidTimestamp
    })?;

    let skew_secs = now.abs_diff(claimed_time);
    if skew_secs > MAX_CLOCK_SKEW_SECS {
        debug!(path = %ctx.path, skew_secs, "Rejecting request outside the time window");
        return Err(AuthError::RequestExpired { skew_secs });
    }

    let user = match ctx.claimed_user.as_deref() {
        Some(user) if !user.is_empty() => user,
        _ => {
            debug!(path = %ctx.path, "Rejecting request without Authorization-User");
            return Err(AuthError::MissingUser);
        }
    };

    let secret = credential_provider.get_secret(user).await?;
    let resolved = Choice::from(u8::from(secret.is_some()));
    let key = secret.as_deref().map_or(UNKNOWN_USER_KEY, str::as_bytes);

    let string_to_sign = build_string_to_sign(&ctx.method, &ctx.path, time, user);
    let expected = compute_signature(key, &string_to_sign);
    let provided = ctx.provided_signature().unwrap_or_default();

    let valid = provided.as_bytes().ct_eq(expected.as_bytes()) & resolved;

    if valid.into() {
        debug!(user, path = %ctx.path, "HMAC verification succeeded");
        Ok(AuthResult {
            user: user.to_owned(),
        })
    } else {
        debug!(user, path = %ctx.path, "HMAC signature mismatch");
        Err(AuthError::SignatureDoesNotMatch)
    }
}

/// Parse a timestamp made only of ASCII digits. Signs and whitespace are rejected.
fn parse_timestamp(value: &str) -> Option<i64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}
