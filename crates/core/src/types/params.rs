//! Filter parameter sets for the read operations exposed by the proxy.
//!
//! Every field is optional. A populated field is forwarded upstream under the
//! key of the same name; an absent field is omitted from the query string.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use super::query::{QueryPairs, ToQueryString};
use super::status::{
    FinancialStatus, FulfillmentStatus, OrderCountFinancialStatus, OrderCountStatus, OrderStatus,
    SortDirection,
};

/// Timestamp with the caller's UTC offset preserved.
pub type Timestamp = DateTime<FixedOffset>;

/// Filters for `GET orders.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OrderListParams {
    /// Only orders attributed to this app ID (or `current`).
    pub attribution_app_id: Option<String>,
    pub created_at_max: Option<Timestamp>,
    pub created_at_min: Option<Timestamp>,
    /// Comma-separated list of fields to return.
    pub fields: Option<String>,
    pub financial_status: Option<FinancialStatus>,
    pub fulfillment_status: Option<FulfillmentStatus>,
    /// Comma-separated list of order IDs.
    pub ids: Option<String>,
    pub limit: Option<u32>,
    pub processed_at_max: Option<Timestamp>,
    pub processed_at_min: Option<Timestamp>,
    /// Only orders after the specified ID.
    pub since_id: Option<u64>,
    pub status: Option<OrderStatus>,
    pub updated_at_max: Option<Timestamp>,
    pub updated_at_min: Option<Timestamp>,
}

impl ToQueryString for OrderListParams {
    fn to_query_string(&self) -> String {
        QueryPairs::new()
            .text("attribution_app_id", self.attribution_app_id.as_deref())
            .timestamp("created_at_max", self.created_at_max.as_ref())
            .timestamp("created_at_min", self.created_at_min.as_ref())
            .text("fields", self.fields.as_deref())
            .display("financial_status", self.financial_status)
            .display("fulfillment_status", self.fulfillment_status)
            .text("ids", self.ids.as_deref())
            .display("limit", self.limit)
            .timestamp("processed_at_max", self.processed_at_max.as_ref())
            .timestamp("processed_at_min", self.processed_at_min.as_ref())
            .display("since_id", self.since_id)
            .display("status", self.status)
            .timestamp("updated_at_max", self.updated_at_max.as_ref())
            .timestamp("updated_at_min", self.updated_at_min.as_ref())
            .finish()
    }
}

/// Filters for `GET orders/count.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OrderCountParams {
    pub created_at_max: Option<Timestamp>,
    pub created_at_min: Option<Timestamp>,
    pub financial_status: Option<OrderCountFinancialStatus>,
    pub fulfillment_status: Option<FulfillmentStatus>,
    pub status: Option<OrderCountStatus>,
    pub updated_at_max: Option<Timestamp>,
    pub updated_at_min: Option<Timestamp>,
}

impl ToQueryString for OrderCountParams {
    fn to_query_string(&self) -> String {
        QueryPairs::new()
            .timestamp("created_at_max", self.created_at_max.as_ref())
            .timestamp("created_at_min", self.created_at_min.as_ref())
            .display("financial_status", self.financial_status)
            .display("fulfillment_status", self.fulfillment_status)
            .display("status", self.status)
            .timestamp("updated_at_max", self.updated_at_max.as_ref())
            .timestamp("updated_at_min", self.updated_at_min.as_ref())
            .finish()
    }
}

/// Filters for `GET customers/count.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CustomerCountParams {
    pub created_at_max: Option<Timestamp>,
    pub created_at_min: Option<Timestamp>,
    pub updated_at_max: Option<Timestamp>,
    pub updated_at_min: Option<Timestamp>,
}

impl ToQueryString for CustomerCountParams {
    fn to_query_string(&self) -> String {
        QueryPairs::new()
            .timestamp("created_at_max", self.created_at_max.as_ref())
            .timestamp("created_at_min", self.created_at_min.as_ref())
            .timestamp("updated_at_max", self.updated_at_max.as_ref())
            .timestamp("updated_at_min", self.updated_at_min.as_ref())
            .finish()
    }
}

/// Filters for `GET customers/search.json`.
///
/// `order_field` and `order_direction` are sent upstream as a single
/// `order=<field> <DIRECTION>` parameter, and only when both are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CustomerSearchParams {
    /// Comma-separated list of fields to return.
    pub fields: Option<String>,
    pub limit: Option<u32>,
    /// Field to sort by (e.g. `last_order_date`).
    pub order_field: Option<String>,
    pub order_direction: Option<SortDirection>,
    /// Shopify customer search query (e.g. `email:bob@example.com`).
    pub query: Option<String>,
}

impl CustomerSearchParams {
    /// Combined `order` value, if both halves are populated.
    #[must_use]
    pub fn order(&self) -> Option<String> {
        let field = self.order_field.as_deref().filter(|f| !f.is_empty())?;
        let direction = self.order_direction?;
        Some(format!("{field} {direction}"))
    }
}

impl ToQueryString for CustomerSearchParams {
    fn to_query_string(&self) -> String {
        QueryPairs::new()
            .text("fields", self.fields.as_deref())
            .display("limit", self.limit)
            .text("order", self.order().as_deref())
            .text("query", self.query.as_deref())
            .finish()
    }
}

/// Field selection for single-resource lookups (`orders/<id>.json`, `customers/<id>.json`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResourceLookupParams {
    /// Comma-separated list of fields to return.
    pub fields: Option<String>,
}

impl ToQueryString for ResourceLookupParams {
    fn to_query_string(&self) -> String {
        QueryPairs::new()
            .text("fields", self.fields.as_deref())
            .finish()
    }
}
