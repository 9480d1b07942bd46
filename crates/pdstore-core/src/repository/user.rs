//! In-memory user repository used as the credential provider.

use std::collections::HashMap;

use async_trait::async_trait;
use pdstore_auth::{AuthError, CredentialProvider};

use crate::config::UserRecord;

/// Credential lookup over user records loaded from configuration.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    records: HashMap<String, UserRecord>,
}

impl InMemoryUserRepository {
    /// Create a repository from user records keyed by user identifier.
    #[must_use]
    pub fn new(records: HashMap<String, UserRecord>) -> Self {
        Self { records }
    }

    /// Number of known users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no users are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl CredentialProvider for InMemoryUserRepository {
    async fn get_secret(&self, user_id: &str) -> Result<Option<String>, AuthError> {
        Ok(self.records.get(user_id).map(|r| r.password.clone()))
    }
}
