//! HTTP route handlers for the proxy.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                    - Health check (public)
//! GET  /openapi.json              - OpenAPI document (public)
//! GET  /.well-known/*             - Static plugin manifest files (public)
//!
//! # Orders (bearer auth)
//! GET  /orders                    - Order listing
//! GET  /orders/count              - Order count
//! GET  /orders/{order_id}         - Order detail
//!
//! # Customers (bearer auth)
//! GET  /customers/count           - Customer count
//! GET  /customers/search          - Customer search
//! GET  /customers/{customer_id}   - Customer detail
//! ```

use std::fmt::Display;

use axum::{
    Router,
    http::{HeaderValue, Request, Response},
    middleware,
    routing::get,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;
use url::Url;

use crate::config::ProxyConfig;
use crate::error::AppError;
use crate::middleware::{request_id_middleware, require_bearer};
use crate::state::AppState;

pub mod customers;
pub mod openapi;
pub mod orders;

/// Origin of the ChatGPT web client, which calls the proxy as a plugin.
pub const CHATGPT_ORIGIN: &str = "https://chat.openai.com";

/// Build the complete application router.
pub fn router(state: AppState) -> Router {
    let config = state.config();

    let resources = Router::new()
        .route("/orders", get(orders::index))
        .route("/orders/count", get(orders::count))
        .route("/orders/{order_id}", get(orders::show))
        .route("/customers/count", get(customers::count))
        .route("/customers/search", get(customers::search))
        .route("/customers/{customer_id}", get(customers::show));

    let resources = if config.is_local() {
        tracing::warn!(
            public_url = %config.public_url,
            "Local server detected, bearer authentication disabled"
        );
        resources
    } else {
        resources.route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer,
        ))
    };

    Router::new()
        .route("/health", get(health))
        .route("/openapi.json", get(openapi::document))
        .nest_service("/.well-known", ServeDir::new(&config.well_known_dir))
        .merge(resources)
        .layer(cors_layer(config))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &Response<_>, latency: std::time::Duration, span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not call Shopify.
async fn health() -> &'static str {
    "ok"
}

/// CORS for the public URL and the ChatGPT origin, with credentials.
fn cors_layer(config: &ProxyConfig) -> CorsLayer {
    let origins = [config.public_url.as_str(), CHATGPT_ORIGIN]
        .into_iter()
        .filter_map(|url| Url::parse(url).ok())
        .filter_map(|url| HeaderValue::from_str(&url.origin().ascii_serialization()).ok())
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

/// Map an extractor rejection (bad path or query) to a 400 response.
pub(crate) fn bad_request(rejection: impl Display) -> AppError {
    AppError::BadRequest(rejection.to_string())
}
