//! Integration tests for Shop Admin Proxy.
//!
//! Each test spawns the real router on an ephemeral port, pointed at an
//! `httpmock` server that stands in for the Shopify Admin API, and talks to
//! it over HTTP with `reqwest`.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shop-admin-proxy-integration-tests
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use httpmock::MockServer;
use secrecy::SecretString;
use shop_admin_proxy::config::{ProxyConfig, ShopifyConfig};
use shop_admin_proxy::routes;
use shop_admin_proxy::shopify::{ShopifyClient, ShopifyError};
use shop_admin_proxy::state::AppState;

/// Bearer token accepted by the proxy under test.
pub const BEARER_TOKEN: &str = "itest_Zq8vN3kW6rT1yB5m";

/// Shopify access token the mock upstream expects.
pub const SHOP_ACCESS_TOKEN: &str = "shpat_itest_access_token";

/// Public URL for a deployed (authenticated) proxy.
pub const REMOTE_PUBLIC_URL: &str = "https://proxy.example.net";

/// A running proxy plus its mock upstream.
pub struct TestContext {
    pub client: reqwest::Client,
    pub base_url: String,
    pub upstream: MockServer,
}

impl TestContext {
    /// Start a proxy that requires bearer authentication.
    ///
    /// # Errors
    ///
    /// Returns an error if the proxy cannot bind or build its client.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        Self::with_public_url(REMOTE_PUBLIC_URL).await
    }

    /// Start a proxy advertising `public_url`.
    ///
    /// A loopback URL turns bearer authentication off.
    ///
    /// # Errors
    ///
    /// Returns an error if the proxy cannot bind or build its client.
    pub async fn with_public_url(public_url: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let upstream = MockServer::start_async().await;
        let state = state(public_url, &upstream.base_url())?;

        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, routes::router(state)).await;
        });

        Ok(Self {
            client: reqwest::Client::new(),
            base_url: format!("http://{addr}"),
            upstream,
        })
    }

    /// Absolute URL for a proxy path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Authenticated GET against the proxy.
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.get(self.url(path)).bearer_auth(BEARER_TOKEN)
    }

    /// Upstream path for a resource under the configured API version.
    #[must_use]
    pub fn upstream_path(resource: &str) -> String {
        format!("/admin/api/2022-10/{resource}.json")
    }
}

fn state(public_url: &str, upstream: &str) -> Result<AppState, ShopifyError> {
    let config = ProxyConfig {
        host: [127, 0, 0, 1].into(),
        port: 0,
        public_url: public_url.to_string(),
        shop_name: "Integration Shop".to_string(),
        shopify: ShopifyConfig {
            store: "integration.myshopify.com".to_string(),
            api_version: "2022-10".to_string(),
            access_token: SecretString::from(SHOP_ACCESS_TOKEN),
        },
        bearer_token: SecretString::from(BEARER_TOKEN),
        well_known_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/well-known"),
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 1.0,
    };
    let client = ShopifyClient::with_base_url(&config.shopify, upstream)?;
    Ok(AppState::with_client(config, client))
}
