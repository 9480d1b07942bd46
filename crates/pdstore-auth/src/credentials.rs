//! Credential provider trait and implementations.
//!
//! This module defines the [`CredentialProvider`] trait for resolving the shared
//! secret of a user, along with a [`StaticCredentialProvider`] for testing and
//! development use cases.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::AuthError;

/// Trait for looking up shared secrets by user identifier.
///
/// Implementations may back this with a database, configuration file,
/// or any other credential store. Lookups may run concurrently.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Retrieve the shared secret for the given user.
    ///
    /// An unknown user is not an error: it resolves to `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::CredentialStore`] if the backing store cannot be queried.
    async fn get_secret(&self, user_id: &str) -> Result<Option<String>, AuthError>;
}

/// A simple in-memory credential provider backed by a `HashMap`.
///
/// # Examples
///
/// ```
/// use pdstore_auth::credentials::{CredentialProvider, StaticCredentialProvider};
///
/// # tokio_test_block_on(async {
/// let provider = StaticCredentialProvider::new(vec![
///     ("test-user".to_owned(), "mock".to_owned()),
/// ]);
///
/// let secret = provider.get_secret("test-user").await.unwrap();
/// assert_eq!(secret.as_deref(), Some("mock"));
/// # });
/// # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticCredentialProvider {
    credentials: HashMap<String, String>,
}

impl StaticCredentialProvider {
    /// Create a new `StaticCredentialProvider` from an iterable of (user_id, secret) pairs.
    pub fn new(credentials: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            credentials: credentials.into_iter().collect(),
        }
    }
}

#[async_trait]
impl CredentialProvider for StaticCredentialProvider {
    async fn get_secret(&self, user_id: &str) -> Result<Option<String>, AuthError> {
        Ok(self.credentials.get(user_id).cloned())
    }
}
