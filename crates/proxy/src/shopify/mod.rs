//! Shopify Admin REST API client (HIGH PRIVILEGE).
//!
//! # Security
//!
//! **This module holds the shop's Admin API access token.** The proxy only
//! exposes read operations on orders and customers, but the token itself may
//! carry broader scopes, so it is never logged or echoed to callers.
//!
//! # Architecture
//!
//! - One `GET` per operation against `/admin/api/<version>/<resource>.json`
//! - Query strings come from the filter types in `shop-admin-proxy-core`
//! - No retries, caching or pagination; failures surface to the caller
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_admin_proxy::shopify::ShopifyClient;
//! use shop_admin_proxy_core::{OrderListParams, OrderStatus};
//!
//! let client = ShopifyClient::new(&config.shopify)?;
//!
//! let params = OrderListParams {
//!     status: Some(OrderStatus::Open),
//!     limit: Some(5),
//!     ..Default::default()
//! };
//! let orders = client.get_orders(&params).await?;
//! ```

mod client;

pub use client::{ACCESS_TOKEN_HEADER, ShopifyClient};

use thiserror::Error;

/// Errors that can occur when interacting with the Shopify Admin API.
#[derive(Debug, Error)]
pub enum ShopifyError {
    /// HTTP request failed (DNS, connection, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("API error: {status} - {body}")]
    Api {
        status: u16,
        /// Upstream error body, decoded as JSON when possible.
        body: serde_json::Value,
    },

    /// Upstream answered 404 for the requested resource.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Body was not JSON or did not match the expected envelope.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configured access token cannot be sent as a header value.
    #[error("Access token is not a valid header value")]
    InvalidAccessToken,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_shopify_error_display() {
        let err = ShopifyError::NotFound("orders/123".to_string());
        assert_eq!(err.to_string(), "Not found: orders/123");
    }

    #[test]
    fn test_api_error_display_includes_body() {
        let err = ShopifyError::Api {
            status: 401,
            body: json!({ "errors": "[API] Invalid API key or access token" }),
        };
        let message = err.to_string();
        assert!(message.starts_with("API error: 401 - "));
        assert!(message.contains("Invalid API key"));
    }

    #[test]
    fn test_invalid_access_token_display() {
        assert_eq!(
            ShopifyError::InvalidAccessToken.to_string(),
            "Access token is not a valid header value"
        );
    }
}
