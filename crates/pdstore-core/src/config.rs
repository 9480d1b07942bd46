//! Product store configuration.
//!
//! Configuration is a JSON document selecting the repository backends and
//! seeding the in-memory stores, plus a few environment overrides:
//!
//! ```json
//! {
//!   "gatewayListen": "0.0.0.0:8000",
//!   "logLevel": "info",
//!   "repositories": {
//!     "products": { "mocked": true, "seed": [] },
//!     "users": { "mocked": true, "records": { "test-user": { "password": "mock" } } }
//!   }
//! }
//! ```
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PDSTORE_CONFIG` | *(unset)* | Path to the JSON configuration document |
//! | `GATEWAY_LISTEN` | `0.0.0.0:8000` | Bind address |
//! | `LOG_LEVEL` | `info` | Log level filter |

use std::collections::HashMap;
use std::path::Path;

use pdstore_model::Product;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::error::{CoreError, CoreResult};

/// Environment variable naming the JSON configuration file.
pub const CONFIG_PATH_ENV: &str = "PDSTORE_CONFIG";

/// Top-level product store configuration.
///
/// # Examples
///
/// ```
/// use pdstore_core::config::ProductStoreConfig;
///
/// let config = ProductStoreConfig::builder().log_level("debug".to_owned()).build();
/// assert_eq!(config.gateway_listen, "0.0.0.0:8000");
/// assert!(config.repositories.products.mocked);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductStoreConfig {
    /// Bind address for the HTTP listener.
    #[builder(default = String::from("0.0.0.0:8000"))]
    pub gateway_listen: String,

    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("info"))]
    pub log_level: String,

    /// Repository backend selection and seed data.
    #[builder(default)]
    pub repositories: RepositoriesConfig,
}

impl Default for ProductStoreConfig {
    fn default() -> Self {
        Self {
            gateway_listen: String::from("0.0.0.0:8000"),
            log_level: String::from("info"),
            repositories: RepositoriesConfig::default(),
        }
    }
}

/// Backend selection for each repository.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoriesConfig {
    /// Product repository settings.
    pub products: ProductRepositoryConfig,
    /// User (credential) repository settings.
    pub users: UserRepositoryConfig,
}

/// Product repository settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductRepositoryConfig {
    /// Use the in-memory repository.
    pub mocked: bool,
    /// Products inserted at startup.
    pub seed: Vec<Product>,
}

impl Default for ProductRepositoryConfig {
    fn default() -> Self {
        Self {
            mocked: true,
            seed: Vec::new(),
        }
    }
}

/// User repository settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRepositoryConfig {
    /// Use the in-memory repository.
    pub mocked: bool,
    /// User records keyed by user identifier.
    pub records: HashMap<String, UserRecord>,
}

impl Default for UserRepositoryConfig {
    fn default() -> Self {
        Self {
            mocked: true,
            records: HashMap::new(),
        }
    }
}

/// A single user record.
#[derive(Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// The shared secret used to sign requests.
    pub password: String,
}

impl std::fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRecord")
            .field("password", &"***")
            .finish()
    }
}

impl ProductStoreConfig {
    /// Load configuration from `PDSTORE_CONFIG` (if set) and apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Config`] if the configuration file cannot be read or parsed.
    pub fn from_env() -> CoreResult<Self> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };

        if let Ok(v) = std::env::var("GATEWAY_LISTEN") {
            config.gateway_listen = v;
        }
        if let Ok(v) = std::env::var("LOG_LEVEL") {
            config.log_level = v;
        }

        Ok(config)
    }

    /// Load configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Config`] if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        Self::from_json(&raw)
    }

    /// Parse configuration from a JSON document. Missing sections take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Config`] if the document is not valid.
    pub fn from_json(raw: &str) -> CoreResult<Self> {
        serde_json::from_str(raw).map_err(|e| CoreError::Config(format!("invalid config: {e}")))
    }
}
