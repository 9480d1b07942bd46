//! Dependency context shared by request handlers.

use std::fmt;
use std::sync::Arc;

use pdstore_auth::CredentialProvider;
use tracing::info;

use crate::config::{ProductRepositoryConfig, ProductStoreConfig, UserRepositoryConfig};
use crate::error::{CoreError, CoreResult};
use crate::repository::{InMemoryProductRepository, InMemoryUserRepository, ProductRepository};

/// Repositories and credential lookup, constructed once at startup.
///
/// Cloning is cheap: every field is an `Arc` handle.
#[derive(Clone)]
pub struct ServiceContext {
    products: Arc<dyn ProductRepository>,
    credentials: Arc<dyn CredentialProvider>,
}

impl fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceContext")
            .field("products", &"...")
            .field("credentials", &"...")
            .finish()
    }
}

impl ServiceContext {
    /// Create a context from already-built dependencies.
    #[must_use]
    pub fn new(
        products: Arc<dyn ProductRepository>,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Self {
        Self {
            products,
            credentials,
        }
    }

    /// Build every dependency selected by the configuration and seed the product store.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Config`] if a repository selects a backend that is
    /// not available, or a seed product cannot be stored.
    pub async fn from_config(config: &ProductStoreConfig) -> CoreResult<Self> {
        let products = build_product_repository(&config.repositories.products).await?;
        let credentials = build_user_repository(&config.repositories.users)?;
        Ok(Self::new(products, credentials))
    }

    /// The product repository.
    #[must_use]
    pub fn products(&self) -> &Arc<dyn ProductRepository> {
        &self.products
    }

    /// The credential provider used for request authentication.
    #[must_use]
    pub fn credentials(&self) -> &Arc<dyn CredentialProvider> {
        &self.credentials
    }
}

async fn build_product_repository(
    config: &ProductRepositoryConfig,
) -> CoreResult<Arc<dyn ProductRepository>> {
    if !config.mocked {
        return Err(CoreError::Config(
            "repositories.products: only the in-memory backend is available".to_owned(),
        ));
    }

    let repo = InMemoryProductRepository::new();
    for product in &config.seed {
        repo.add_product(product.clone()).await?;
    }
    info!(seeded = repo.len(), "using in-memory product repository");

    Ok(Arc::new(repo))
}

fn build_user_repository(config: &UserRepositoryConfig) -> CoreResult<Arc<dyn CredentialProvider>> {
    if !config.mocked {
        return Err(CoreError::Config(
            "repositories.users: only the in-memory backend is available".to_owned(),
        ));
    }

    let repo = InMemoryUserRepository::new(config.records.clone());
    info!(users = repo.len(), "using in-memory user repository");

    Ok(Arc::new(repo))
}
