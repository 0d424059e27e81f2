//! Shopify Admin REST API client authenticated with a shop access token.

use std::sync::Arc;

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::instrument;

use shop_admin_proxy_core::{
    CountResponse, CustomerCountParams, CustomerId, CustomerResponse, CustomerSearchParams,
    CustomersResponse, OrderCountParams, OrderId, OrderListParams, OrderResponse, OrdersResponse,
    ResourceLookupParams, ToQueryString,
};

use super::ShopifyError;
use crate::config::ShopifyConfig;

/// Header carrying the shop's Admin API access token.
pub const ACCESS_TOKEN_HEADER: &str = "x-shopify-access-token";

/// Shopify Admin REST API client.
///
/// Cheap to clone; the underlying connection pool is shared. The client keeps
/// no per-call state: every operation is one independent `GET`.
#[derive(Clone)]
pub struct ShopifyClient {
    inner: Arc<ShopifyClientInner>,
}

struct ShopifyClientInner {
    client: reqwest::Client,
    /// Scheme and authority, without a trailing slash.
    base_url: String,
    api_version: String,
}

impl ShopifyClient {
    /// Create a client for `https://<store>`.
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::InvalidAccessToken` if the token contains
    /// characters not allowed in a header, or `ShopifyError::Http` if the
    /// HTTP client fails to build.
    pub fn new(config: &ShopifyConfig) -> Result<Self, ShopifyError> {
        Self::with_base_url(config, &format!("https://{}", config.store))
    }

    /// Create a client against an explicit base URL (scheme and authority).
    ///
    /// # Errors
    ///
    /// See [`ShopifyClient::new`].
    pub fn with_base_url(config: &ShopifyConfig, base_url: &str) -> Result<Self, ShopifyError> {
        let mut token = HeaderValue::from_str(config.access_token.expose_secret())
            .map_err(|_| ShopifyError::InvalidAccessToken)?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(ACCESS_TOKEN_HEADER), token);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            inner: Arc::new(ShopifyClientInner {
                client,
                base_url: base_url.trim_end_matches('/').to_string(),
                api_version: config.api_version.clone(),
            }),
        })
    }

    /// Get the configured API version.
    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.inner.api_version
    }

    /// Build the full URL for a resource path such as `orders` or `customers/42`.
    ///
    /// `?<query>` is appended only when `query` is non-empty.
    #[must_use]
    pub fn endpoint_url(&self, resource: &str, query: &str) -> String {
        let url = format!(
            "{}/admin/api/{}/{resource}.json",
            self.inner.base_url, self.inner.api_version
        );
        if query.is_empty() {
            url
        } else {
            format!("{url}?{query}")
        }
    }

    /// Issue one authenticated `GET` and decode the JSON body.
    async fn get<T: DeserializeOwned>(&self, resource: &str, query: &str) -> Result<T, ShopifyError> {
        let url = self.endpoint_url(resource, query);
        let response = self.inner.client.get(&url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        tracing::debug!(%status, bytes = body.len(), "Shopify response");

        if status == StatusCode::NOT_FOUND {
            return Err(ShopifyError::NotFound(resource.to_string()));
        }

        if !status.is_success() {
            let body = serde_json::from_slice(&body).unwrap_or_else(|_| {
                serde_json::Value::String(String::from_utf8_lossy(&body).into_owned())
            });
            return Err(ShopifyError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }

    // =========================================================================
    // Order methods
    // =========================================================================

    /// Get a single order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the upstream answers with a
    /// non-success status, or the body is not an order envelope.
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn get_order(
        &self,
        id: OrderId,
        params: &ResourceLookupParams,
    ) -> Result<OrderResponse, ShopifyError> {
        self.get(&format!("orders/{id}"), &params.to_query_string())
            .await
    }

    /// List orders matching the filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the upstream answers with a
    /// non-success status, or the body is not an orders envelope.
    #[instrument(skip(self))]
    pub async fn get_orders(&self, params: &OrderListParams) -> Result<OrdersResponse, ShopifyError> {
        self.get("orders", &params.to_query_string()).await
    }

    /// Count orders matching the filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the upstream answers with a
    /// non-success status, or the body is not a count.
    #[instrument(skip(self))]
    pub async fn count_orders(
        &self,
        params: &OrderCountParams,
    ) -> Result<CountResponse, ShopifyError> {
        self.get("orders/count", &params.to_query_string()).await
    }

    // =========================================================================
    // Customer methods
    // =========================================================================

    /// Get a single customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the upstream answers with a
    /// non-success status, or the body is not a customer envelope.
    #[instrument(skip(self), fields(customer_id = %id))]
    pub async fn get_customer(
        &self,
        id: CustomerId,
        params: &ResourceLookupParams,
    ) -> Result<CustomerResponse, ShopifyError> {
        self.get(&format!("customers/{id}"), &params.to_query_string())
            .await
    }

    /// Search customers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the upstream answers with a
    /// non-success status, or the body is not a customers envelope.
    #[instrument(skip(self))]
    pub async fn search_customers(
        &self,
        params: &CustomerSearchParams,
    ) -> Result<CustomersResponse, ShopifyError> {
        self.get("customers/search", &params.to_query_string())
            .await
    }

    /// Count customers matching the filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the upstream answers with a
    /// non-success status, or the body is not a count.
    #[instrument(skip(self))]
    pub async fn count_customers(
        &self,
        params: &CustomerCountParams,
    ) -> Result<CountResponse, ShopifyError> {
        self.get("customers/count", &params.to_query_string())
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use httpmock::prelude::*;
    use secrecy::SecretString;
    use serde_json::json;
    use shop_admin_proxy_core::{OrderStatus, SortDirection};

    use super::*;

    const TOKEN: &str = "shpat_0123456789abcdef";

    fn config(store: &str) -> ShopifyConfig {
        ShopifyConfig {
            store: store.to_string(),
            api_version: "2022-10".to_string(),
            access_token: SecretString::from(TOKEN),
        }
    }

    #[test]
    fn test_endpoint_url_without_query_has_no_question_mark() {
        let client = ShopifyClient::new(&config("x.example.com")).unwrap();
        assert_eq!(
            client.endpoint_url("orders", ""),
            "https://x.example.com/admin/api/2022-10/orders.json"
        );
    }

    #[test]
    fn test_endpoint_url_single_resource_without_fields() {
        let client = ShopifyClient::new(&config("x.example.com")).unwrap();
        let query = ResourceLookupParams::default().to_query_string();
        assert_eq!(
            client.endpoint_url("customers/207119551", &query),
            "https://x.example.com/admin/api/2022-10/customers/207119551.json"
        );
    }

    #[test]
    fn test_endpoint_url_appends_query() {
        let client = ShopifyClient::new(&config("x.example.com")).unwrap();
        assert_eq!(
            client.endpoint_url("orders/count", "status=any"),
            "https://x.example.com/admin/api/2022-10/orders/count.json?status=any"
        );
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let client =
            ShopifyClient::with_base_url(&config("ignored"), "http://127.0.0.1:9000/").unwrap();
        assert_eq!(
            client.endpoint_url("orders", ""),
            "http://127.0.0.1:9000/admin/api/2022-10/orders.json"
        );
    }

    #[test]
    fn test_invalid_token_is_rejected() {
        let mut cfg = config("x.example.com");
        cfg.access_token = SecretString::from("bad\ntoken");
        assert!(matches!(
            ShopifyClient::new(&cfg),
            Err(ShopifyError::InvalidAccessToken)
        ));
    }

    #[tokio::test]
    async fn test_get_orders_sends_token_and_filters() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/admin/api/2022-10/orders.json")
                    .header(ACCESS_TOKEN_HEADER, TOKEN)
                    .query_param("limit", "5")
                    .query_param("status", "open");
                then.status(200)
                    .json_body(json!({ "orders": [{ "id": 1, "total_price": "10.00" }] }));
            })
            .await;

        let client = ShopifyClient::with_base_url(&config("ignored"), &server.base_url()).unwrap();
        let params = OrderListParams {
            limit: Some(5),
            status: Some(OrderStatus::Open),
            ..Default::default()
        };
        let response = client.get_orders(&params).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.orders.len(), 1);
        assert_eq!(response.orders[0].id, Some(OrderId::new(1)));
    }

    #[tokio::test]
    async fn test_search_customers_sends_combined_order() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/admin/api/2022-10/customers/search.json")
                    .query_param("order", "last_order_date DESC")
                    .query_param("query", "tag:vip");
                then.status(200).json_body(json!({ "customers": [] }));
            })
            .await;

        let client = ShopifyClient::with_base_url(&config("ignored"), &server.base_url()).unwrap();
        let params = CustomerSearchParams {
            order_field: Some("last_order_date".to_string()),
            order_direction: Some(SortDirection::Desc),
            query: Some("tag:vip".to_string()),
            ..Default::default()
        };
        let response = client.search_customers(&params).await.unwrap();

        mock.assert_async().await;
        assert!(response.customers.is_empty());
    }

    #[tokio::test]
    async fn test_count_customers_decodes_count() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/admin/api/2022-10/customers/count.json");
                then.status(200).json_body(json!({ "count": 17 }));
            })
            .await;

        let client = ShopifyClient::with_base_url(&config("ignored"), &server.base_url()).unwrap();
        let count = client
            .count_customers(&CustomerCountParams::default())
            .await
            .unwrap();
        assert_eq!(count.count, 17);
    }

    #[tokio::test]
    async fn test_not_found_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/admin/api/2022-10/orders/42.json");
                then.status(404).json_body(json!({ "errors": "Not Found" }));
            })
            .await;

        let client = ShopifyClient::with_base_url(&config("ignored"), &server.base_url()).unwrap();
        let err = client
            .get_order(OrderId::new(42), &ResourceLookupParams::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ShopifyError::NotFound(ref r) if r == "orders/42"));
    }

    #[tokio::test]
    async fn test_error_status_keeps_upstream_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/admin/api/2022-10/orders/count.json");
                then.status(401)
                    .json_body(json!({ "errors": "[API] Invalid API key or access token" }));
            })
            .await;

        let client = ShopifyClient::with_base_url(&config("ignored"), &server.base_url()).unwrap();
        let err = client
            .count_orders(&OrderCountParams::default())
            .await
            .unwrap_err();

        match err {
            ShopifyError::Api { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body["errors"], "[API] Invalid API key or access token");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_body_is_parse_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/admin/api/2022-10/customers/7.json");
                then.status(200).body("<html>maintenance</html>");
            })
            .await;

        let client = ShopifyClient::with_base_url(&config("ignored"), &server.base_url()).unwrap();
        let err = client
            .get_customer(CustomerId::new(7), &ResourceLookupParams::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ShopifyError::Parse(_)));
    }

    #[tokio::test]
    async fn test_transport_failure_is_http_error() {
        // Bind then release a port so the connection is refused.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client =
            ShopifyClient::with_base_url(&config("ignored"), &format!("http://{addr}")).unwrap();
        let err = client
            .count_orders(&OrderCountParams::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ShopifyError::Http(_)));
    }
}
