//! Bearer token authentication for the resource routes.
//!
//! Callers present `Authorization: Bearer <token>`; the token is compared in
//! constant time against the configured `BEARER_TOKEN`.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use secrecy::ExposeSecret;

use crate::error::AppError;
use crate::state::AppState;

/// Middleware that rejects requests without the configured bearer token.
///
/// # Errors
///
/// Returns `AppError::Unauthorized` when the header is missing, uses another
/// scheme, or carries the wrong token.
pub async fn require_bearer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let presented = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(parse_bearer);

    let expected = state.config().bearer_token.expose_secret();
    match presented {
        Some(token) if constant_time_compare(token, expected) => Ok(next.run(request).await),
        _ => {
            tracing::warn!(path = %request.uri().path(), "Rejected request with invalid or missing token");
            Err(AppError::Unauthorized("Invalid or missing token".to_string()))
        }
    }
}

/// Extract the credentials from a `Bearer` authorization value.
fn parse_bearer(value: &str) -> Option<&str> {
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// Constant-time string comparison to prevent timing attacks.
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result: u8 = 0;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }

    result == 0
}
