//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ProxyConfig;
use crate::shopify::{ShopifyClient, ShopifyError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and is read-only for the
/// lifetime of the process.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ProxyConfig,
    shopify: ShopifyClient,
}

impl AppState {
    /// Create a new application state with a client for the configured shop.
    ///
    /// # Errors
    ///
    /// Returns an error if the Shopify client cannot be built from the
    /// configured credentials.
    pub fn new(config: ProxyConfig) -> Result<Self, ShopifyError> {
        let shopify = ShopifyClient::new(&config.shopify)?;
        Ok(Self::with_client(config, shopify))
    }

    /// Create a new application state around an existing client.
    #[must_use]
    pub fn with_client(config: ProxyConfig, shopify: ShopifyClient) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, shopify }),
        }
    }

    /// Get a reference to the proxy configuration.
    #[must_use]
    pub fn config(&self) -> &ProxyConfig {
        &self.inner.config
    }

    /// Get a reference to the Shopify Admin API client.
    #[must_use]
    pub fn shopify(&self) -> &ShopifyClient {
        &self.inner.shopify
    }
}
