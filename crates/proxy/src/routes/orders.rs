//! Order route handlers.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};
use shop_admin_proxy_core::{
    CountResponse, DEFAULT_ORDER_FIELDS, FinancialStatus, FulfillmentStatus, OrderCountFinancialStatus,
    OrderCountParams, OrderCountStatus, OrderId, OrderListParams, OrderResponse, OrderStatus,
    OrdersResponse, ResourceLookupParams,
};

use super::bad_request;
use crate::error::AppError;
use crate::state::AppState;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_LIMIT: u32 = 10;

/// List orders.
///
/// Unset filters fall back to open orders in any financial and fulfillment
/// state, ten per page, with the summary field list.
///
/// # Errors
///
/// Returns 400 for malformed filters and 502 when Shopify fails.
pub async fn index(
    State(state): State<AppState>,
    query: Result<Query<OrderListParams>, QueryRejection>,
) -> Result<Json<OrdersResponse>, AppError> {
    let Query(params) = query.map_err(bad_request)?;
    let params = list_defaults(params);

    let orders = state.shopify().get_orders(&params).await?;
    tracing::debug!(count = orders.orders.len(), "Listed orders");
    Ok(Json(orders))
}

/// Count orders.
///
/// # Errors
///
/// Returns 400 for malformed filters and 502 when Shopify fails.
pub async fn count(
    State(state): State<AppState>,
    query: Result<Query<OrderCountParams>, QueryRejection>,
) -> Result<Json<CountResponse>, AppError> {
    let Query(params) = query.map_err(bad_request)?;
    let params = count_defaults(params);

    Ok(Json(state.shopify().count_orders(&params).await?))
}

/// Fetch a single order.
///
/// # Errors
///
/// Returns 400 for a non-numeric ID, 404 when Shopify has no such order and
/// 502 for other upstream failures.
pub async fn show(
    State(state): State<AppState>,
    path: Result<Path<OrderId>, PathRejection>,
    query: Result<Query<ResourceLookupParams>, QueryRejection>,
) -> Result<Json<OrderResponse>, AppError> {
    let Path(id) = path.map_err(bad_request)?;
    let Query(mut params) = query.map_err(bad_request)?;
    if is_blank(params.fields.as_deref()) {
        params.fields = Some(DEFAULT_ORDER_FIELDS.to_string());
    }

    Ok(Json(state.shopify().get_order(id, &params).await?))
}

fn list_defaults(mut params: OrderListParams) -> OrderListParams {
    if is_blank(params.fields.as_deref()) {
        params.fields = Some(DEFAULT_ORDER_FIELDS.to_string());
    }
    params.financial_status.get_or_insert(FinancialStatus::Any);
    params.fulfillment_status.get_or_insert(FulfillmentStatus::Any);
    params.limit.get_or_insert(DEFAULT_LIMIT);
    params.status.get_or_insert(OrderStatus::Open);
    params
}

fn count_defaults(mut params: OrderCountParams) -> OrderCountParams {
    params
        .financial_status
        .get_or_insert(OrderCountFinancialStatus::Any);
    params.fulfillment_status.get_or_insert(FulfillmentStatus::Any);
    params.status.get_or_insert(OrderCountStatus::Open);
    params
}

/// An empty string counts as unset.
pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}
