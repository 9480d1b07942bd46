//! Product detail store server.
//!
//! Serves `GET /products/{barcode}` behind HMAC request signing, backed by the
//! in-memory repositories selected in the configuration document.
//!
//! # Usage
//!
//! ```text
//! PDSTORE_CONFIG=/etc/pdstore.json GATEWAY_LISTEN=0.0.0.0:8000 pdstore-server
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PDSTORE_CONFIG` | *(unset)* | JSON configuration document (repositories, users, seed products) |
//! | `GATEWAY_LISTEN` | `0.0.0.0:8000` | Bind address |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as HttpConnBuilder;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use pdstore_core::{ProductStoreConfig, ProductStoreCoreHandler, ProductStoreProvider, ServiceContext};
use pdstore_http::service::{ProductStoreHttpConfig, ProductStoreHttpService};

/// Server version reported at startup.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    Ok(())
}

/// Build the [`ProductStoreHttpConfig`] from the service context.
fn build_http_config(context: &ServiceContext) -> ProductStoreHttpConfig {
    ProductStoreHttpConfig {
        credential_provider: Arc::clone(context.credentials()),
    }
}

/// Wire the service context into the HTTP service.
fn build_service(context: ServiceContext) -> ProductStoreHttpService<ProductStoreCoreHandler> {
    let http_config = build_http_config(&context);
    let provider = Arc::new(ProductStoreProvider::new(context));
    let handler = Arc::new(ProductStoreCoreHandler::new(provider));
    ProductStoreHttpService::new(handler, http_config)
}

/// Run the accept loop, serving connections until a shutdown signal is received.
async fn serve(
    listener: TcpListener,
    service: ProductStoreHttpService<ProductStoreCoreHandler>,
) -> Result<()> {
    let graceful = hyper_util::server::graceful::GracefulShutdown::new();
    let http = HttpConnBuilder::new(TokioExecutor::new());

    let shutdown = async {
        tokio::signal::ctrl_c().await.ok();
        info!("received shutdown signal, draining connections");
    };

    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            result = listener.accept() => {
                let (stream, peer_addr) = match result {
                    Ok(conn) => conn,
                    Err(e) => {
                        warn!(error = %e, "failed to accept connection");
                        continue;
                    }
                };

                let svc = service.clone();
                let conn = http.serve_connection(TokioIo::new(stream), svc);
                let conn = graceful.watch(conn.into_owned());

                tokio::spawn(async move {
                    if let Err(e) = conn.await {
                        error!(peer_addr = %peer_addr, error = %e, "connection error");
                    }
                });
            }

            () = &mut shutdown => {
                info!("shutting down gracefully");
                break;
            }
        }
    }

    graceful.shutdown().await;
    info!("all connections drained, exiting");

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = ProductStoreConfig::from_env().context("failed to load configuration")?;

    init_tracing(&config.log_level)?;

    info!(
        gateway_listen = %config.gateway_listen,
        products_mocked = config.repositories.products.mocked,
        users_mocked = config.repositories.users.mocked,
        version = VERSION,
        "starting product detail store",
    );

    let context = ServiceContext::from_config(&config)
        .await
        .context("failed to build service context")?;
    let service = build_service(context);

    let addr: SocketAddr = config
        .gateway_listen
        .parse()
        .with_context(|| format!("invalid bind address: {}", config.gateway_listen))?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    info!(%addr, "listening for connections");

    serve(listener, service).await
}
