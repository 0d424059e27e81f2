//! Customer route handlers.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};
use shop_admin_proxy_core::{
    CountResponse, CustomerCountParams, CustomerId, CustomerResponse, CustomerSearchParams,
    CustomersResponse, DEFAULT_CUSTOMER_FIELDS, ResourceLookupParams, SortDirection,
};

use super::bad_request;
use super::orders::{DEFAULT_LIMIT, is_blank};
use crate::error::AppError;
use crate::state::AppState;

/// Sort field used when the caller does not pick one.
pub const DEFAULT_ORDER_FIELD: &str = "last_order_date";

/// Count customers.
///
/// # Errors
///
/// Returns 400 for malformed timestamps and 502 when Shopify fails.
pub async fn count(
    State(state): State<AppState>,
    query: Result<Query<CustomerCountParams>, QueryRejection>,
) -> Result<Json<CountResponse>, AppError> {
    let Query(params) = query.map_err(bad_request)?;
    Ok(Json(state.shopify().count_customers(&params).await?))
}

/// Search customers.
///
/// Unset options fall back to the summary field list, ten results, most
/// recent order first.
///
/// # Errors
///
/// Returns 400 for malformed options and 502 when Shopify fails.
pub async fn search(
    State(state): State<AppState>,
    query: Result<Query<CustomerSearchParams>, QueryRejection>,
) -> Result<Json<CustomersResponse>, AppError> {
    let Query(params) = query.map_err(bad_request)?;
    let params = search_defaults(params);

    let customers = state.shopify().search_customers(&params).await?;
    tracing::debug!(count = customers.customers.len(), "Searched customers");
    Ok(Json(customers))
}

/// Fetch a single customer.
///
/// # Errors
///
/// Returns 400 for a non-numeric ID, 404 when Shopify has no such customer
/// and 502 for other upstream failures.
pub async fn show(
    State(state): State<AppState>,
    path: Result<Path<CustomerId>, PathRejection>,
    query: Result<Query<ResourceLookupParams>, QueryRejection>,
) -> Result<Json<CustomerResponse>, AppError> {
    let Path(id) = path.map_err(bad_request)?;
    let Query(mut params) = query.map_err(bad_request)?;
    if is_blank(params.fields.as_deref()) {
        params.fields = Some(DEFAULT_CUSTOMER_FIELDS.to_string());
    }

    Ok(Json(state.shopify().get_customer(id, &params).await?))
}

fn search_defaults(mut params: CustomerSearchParams) -> CustomerSearchParams {
    if is_blank(params.fields.as_deref()) {
        params.fields = Some(DEFAULT_CUSTOMER_FIELDS.to_string());
    }
    if is_blank(params.order_field.as_deref()) {
        params.order_field = Some(DEFAULT_ORDER_FIELD.to_string());
    }
    params.limit.get_or_insert(DEFAULT_LIMIT);
    params.order_direction.get_or_insert(SortDirection::Desc);
    params
}
