//! HTTP middleware stack for the proxy.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, added in `main`)
//! 2. `TraceLayer` (request span with method, uri, status, latency)
//! 3. Request ID (add unique ID to each request)
//! 4. CORS (public URL and the ChatGPT origin)
//! 5. Bearer auth (resource routes only, skipped for local servers)

pub mod auth;
pub mod request_id;

pub use auth::require_bearer;
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
