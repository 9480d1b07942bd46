//! End-to-end tests for the product detail store.
//!
//! Each test starts its own server on an ephemeral port, backed by fresh
//! in-memory repositories, and talks to it over real HTTP with `reqwest`.

use std::collections::HashMap;
use std::sync::{Arc, Once};

use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as HttpConnBuilder;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use pdstore_auth::sign_request;
use pdstore_core::config::UserRecord;
use pdstore_core::{
    InMemoryProductRepository, InMemoryUserRepository, ProductStoreCoreHandler,
    ProductStoreProvider, ServiceContext,
};
use pdstore_http::{ProductStoreHttpConfig, ProductStoreHttpService};

/// User configured on every test server.
pub const TEST_USER: &str = "test-user";

/// Shared secret of [`TEST_USER`].
pub const TEST_SECRET: &str = "mock";

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// A running server and a handle on its product store.
#[derive(Debug)]
pub struct TestServer {
    /// Base URL, e.g. `http://127.0.0.1:40123`.
    pub base_url: String,
    /// The product repository behind the server.
    pub products: Arc<InMemoryProductRepository>,
    accept_loop: JoinHandle<()>,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.accept_loop.abort();
    }
}

/// Start a server on `127.0.0.1:0` with [`TEST_USER`] configured.
pub async fn spawn_server() -> TestServer {
    init_tracing();

    let products = Arc::new(InMemoryProductRepository::new());
    let users = InMemoryUserRepository::new(HashMap::from([(
        TEST_USER.to_owned(),
        UserRecord {
            password: TEST_SECRET.to_owned(),
        },
    )]));
    let context = ServiceContext::new(products.clone(), Arc::new(users));

    let http_config = ProductStoreHttpConfig {
        credential_provider: Arc::clone(context.credentials()),
    };
    let provider = Arc::new(ProductStoreProvider::new(context));
    let handler = Arc::new(ProductStoreCoreHandler::new(provider));
    let service = ProductStoreHttpService::new(handler, http_config);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local address");

    let accept_loop = tokio::spawn(async move {
        let http = HttpConnBuilder::new(TokioExecutor::new());
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                continue;
            };
            let conn = http
                .serve_connection(TokioIo::new(stream), service.clone())
                .into_owned();
            tokio::spawn(async move {
                if let Err(e) = conn.await {
                    tracing::debug!(error = %e, "test connection error");
                }
            });
        }
    });

    TestServer {
        base_url: format!("http://{addr}"),
        products,
        accept_loop,
    }
}

/// Current Unix time in seconds.
#[must_use]
pub fn unix_now() -> i64 {
    i64::try_from(
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("clock after epoch")
            .as_secs(),
    )
    .expect("timestamp fits in i64")
}

/// Build a GET request for `path` signed by `user` with `secret` at `time`.
#[must_use]
pub fn signed_get(
    server: &TestServer,
    path: &str,
    user: &str,
    secret: &str,
    time: i64,
) -> reqwest::RequestBuilder {
    let time = time.to_string();
    let auth = sign_request(secret, "GET", path, &time, user);
    reqwest::Client::new()
        .get(format!("{}{path}", server.base_url))
        .header("Authorization-Time", time)
        .header("Authorization-User", user)
        .header("Authorization", auth)
}

/// Fetch a product as [`TEST_USER`], signed now.
pub async fn get_product(server: &TestServer, barcode: &str) -> reqwest::Response {
    signed_get(
        server,
        &format!("/products/{barcode}"),
        TEST_USER,
        TEST_SECRET,
        unix_now(),
    )
    .send()
    .await
    .expect("request sent")
}

mod test_auth;
mod test_products;
