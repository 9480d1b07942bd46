//! Product detail store core: configuration, repositories and business logic.
//!
//! The [`ServiceContext`] is built once at startup from a
//! [`ProductStoreConfig`] and handed to the request handler; there is no
//! process-wide state.

pub mod config;
pub mod context;
pub mod error;
pub mod handler;
pub mod provider;
pub mod repository;

pub use config::ProductStoreConfig;
pub use context::ServiceContext;
pub use error::{CoreError, CoreResult};
pub use handler::ProductStoreCoreHandler;
pub use provider::ProductStoreProvider;
pub use repository::{InMemoryProductRepository, InMemoryUserRepository, ProductRepository};
