//! Integration test harness for the LuxeStore storefront.
//!
//! [`TestServer`] mounts the real router (sessions, security headers,
//! request ids) on an ephemeral port with mock latency disabled, and hands
//! out a cookie-keeping client so each test behaves like one visitor.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p luxestore-integration-tests
//! ```

use std::net::SocketAddr;

use reqwest::{Client, Response, redirect::Policy};
use tokio::{net::TcpListener, task::JoinHandle};

use luxestore_storefront::{app, config::StorefrontConfig, state::AppState};

/// A storefront running in the background of the test runtime.
pub struct TestServer {
    addr: SocketAddr,
    /// Follows redirects and keeps the session cookie.
    pub client: Client,
    /// Keeps the session cookie but stops at the first response, for
    /// asserting on redirects and status codes.
    pub raw_client: Client,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a storefront with the test configuration.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound or the clients cannot be built.
    pub async fn spawn() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener
            .local_addr()
            .expect("Failed to read test listener address");

        let router = app(AppState::new(StorefrontConfig::for_tests()));
        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Test server error");
        });

        let jar = std::sync::Arc::new(reqwest::cookie::Jar::default());
        let client = Client::builder()
            .cookie_provider(jar.clone())
            .build()
            .expect("Failed to create HTTP client");
        let raw_client = Client::builder()
            .cookie_provider(jar)
            .redirect(Policy::none())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            addr,
            client,
            raw_client,
            handle,
        }
    }

    /// Absolute URL for a path on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// GET a page and return its body.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or the body cannot be read.
    pub async fn page(&self, path: &str) -> String {
        self.get(path)
            .await
            .text()
            .await
            .expect("Failed to read response body")
    }

    /// GET a path, following redirects.
    ///
    /// # Panics
    ///
    /// Panics if the request fails.
    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Request failed")
    }

    /// POST a urlencoded form, following redirects.
    ///
    /// # Panics
    ///
    /// Panics if the request fails.
    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Response {
        self.client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("Request failed")
    }

    /// Add one unit of a product to the cart.
    ///
    /// # Panics
    ///
    /// Panics if the request fails.
    pub async fn add_to_cart(&self, product_id: &str) -> Response {
        self.post_form(
            "/cart/add",
            &[("product_id", product_id), ("quantity", "1")],
        )
        .await
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
