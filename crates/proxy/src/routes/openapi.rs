//! Hand-built OpenAPI 3.0 document served at `/openapi.json`.
//!
//! Plugin hosts read this to learn the routes, so it lists every resource
//! route with its query parameters and the bearer security scheme.

use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::config::ProxyConfig;
use crate::state::AppState;

/// Serve the OpenAPI document.
pub async fn document(State(state): State<AppState>) -> Json<Value> {
    Json(build(state.config()))
}

/// Build the document for the configured shop and public URL.
#[must_use]
pub fn build(config: &ProxyConfig) -> Value {
    let shop = &config.shop_name;
    let security = if config.is_local() {
        json!([])
    } else {
        json!([{ "bearerAuth": [] }])
    };

    json!({
        "openapi": "3.0.2",
        "info": {
            "title": format!("{shop} Store Admin Plugin API"),
            "description": format!(
                "An API for querying and looking up information about {shop}'s orders and customers."
            ),
            "version": "1.0.0",
        },
        "servers": [{ "url": config.public_url }],
        "security": security,
        "components": {
            "securitySchemes": {
                "bearerAuth": { "type": "http", "scheme": "bearer" }
            }
        },
        "paths": {
            "/orders": get_op("getOrders", "List orders", vec![
                string_param("attribution_app_id"),
                datetime_param("created_at_max"),
                datetime_param("created_at_min"),
                string_param_default("fields", shop_admin_proxy_core::DEFAULT_ORDER_FIELDS),
                enum_param("financial_status", &[
                    "authorized", "pending", "paid", "partially_paid", "refunded",
                    "voided", "partially_refunded", "any", "unpaid",
                ], "any"),
                enum_param("fulfillment_status", &[
                    "shipped", "partial", "unshipped", "any", "unfulfilled",
                ], "any"),
                string_param("ids"),
                integer_param("limit", Some(10)),
                datetime_param("processed_at_max"),
                datetime_param("processed_at_min"),
                integer_param("since_id", None),
                enum_param("status", &["open", "closed", "cancelled", "any"], "open"),
                datetime_param("updated_at_max"),
                datetime_param("updated_at_min"),
            ]),
            "/orders/count": get_op("getOrdersCount", "Count orders", vec![
                datetime_param("created_at_max"),
                datetime_param("created_at_min"),
                enum_param("financial_status", &[
                    "authorized", "pending", "paid", "refunded", "voided", "any",
                ], "any"),
                enum_param("fulfillment_status", &[
                    "shipped", "partial", "unshipped", "any", "unfulfilled",
                ], "any"),
                enum_param("status", &["open", "closed", "any"], "open"),
                datetime_param("updated_at_max"),
                datetime_param("updated_at_min"),
            ]),
            "/orders/{order_id}": get_op("getOrder", "Get an order", vec![
                path_id_param("order_id"),
                string_param_default("fields", shop_admin_proxy_core::DEFAULT_ORDER_FIELDS),
            ]),
            "/customers/count": get_op("getCustomersCount", "Count customers", vec![
                datetime_param("created_at_max"),
                datetime_param("created_at_min"),
                datetime_param("updated_at_max"),
                datetime_param("updated_at_min"),
            ]),
            "/customers/search": get_op("searchCustomers", "Search customers", vec![
                string_param_default("fields", shop_admin_proxy_core::DEFAULT_CUSTOMER_FIELDS),
                integer_param("limit", Some(10)),
                string_param_default("order_field", "last_order_date"),
                enum_param("order_direction", &["ASC", "DESC"], "DESC"),
                string_param("query"),
            ]),
            "/customers/{customer_id}": get_op("getCustomer", "Get a customer", vec![
                path_id_param("customer_id"),
                string_param_default("fields", shop_admin_proxy_core::DEFAULT_CUSTOMER_FIELDS),
            ]),
        }
    })
}

fn get_op(operation_id: &str, summary: &str, parameters: Vec<Value>) -> Value {
    json!({
        "get": {
            "operationId": operation_id,
            "summary": summary,
            "parameters": parameters,
            "responses": {
                "200": {
                    "description": "Successful Response",
                    "content": { "application/json": { "schema": { "type": "object" } } }
                },
                "400": { "description": "Invalid parameters" },
                "401": { "description": "Invalid or missing token" },
                "404": { "description": "Not found" },
                "502": { "description": "Shopify request failed" }
            }
        }
    })
}

fn query_param(name: &str, schema: Value) -> Value {
    json!({ "name": name, "in": "query", "required": false, "schema": schema })
}

fn string_param(name: &str) -> Value {
    query_param(name, json!({ "type": "string" }))
}

fn string_param_default(name: &str, default: &str) -> Value {
    query_param(name, json!({ "type": "string", "default": default }))
}

fn datetime_param(name: &str) -> Value {
    query_param(name, json!({ "type": "string", "format": "date-time" }))
}

fn integer_param(name: &str, default: Option<u32>) -> Value {
    match default {
        Some(default) => query_param(name, json!({ "type": "integer", "default": default })),
        None => query_param(name, json!({ "type": "integer" })),
    }
}

fn enum_param(name: &str, values: &[&str], default: &str) -> Value {
    query_param(
        name,
        json!({ "type": "string", "enum": values, "default": default }),
    )
}

fn path_id_param(name: &str) -> Value {
    json!({ "name": name, "in": "path", "required": true, "schema": { "type": "integer" } })
}
