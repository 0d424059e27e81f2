//! Order routes against a mock Shopify upstream.

#![allow(clippy::unwrap_used)]

use httpmock::prelude::*;
use reqwest::StatusCode;
use serde_json::{Value, json};
use shop_admin_proxy::shopify::ACCESS_TOKEN_HEADER;
use shop_admin_proxy_core::DEFAULT_ORDER_FIELDS;
use shop_admin_proxy_integration_tests::{SHOP_ACCESS_TOKEN, TestContext};

#[tokio::test]
async fn test_list_orders_applies_defaults_and_token() {
    let ctx = TestContext::new().await.unwrap();
    let mock = ctx
        .upstream
        .mock_async(|when, then| {
            when.method(GET)
                .path(TestContext::upstream_path("orders"))
                .header(ACCESS_TOKEN_HEADER, SHOP_ACCESS_TOKEN)
                .query_param("fields", DEFAULT_ORDER_FIELDS)
                .query_param("limit", "10")
                .query_param("status", "open")
                .query_param("financial_status", "any")
                .query_param("fulfillment_status", "any");
            then.status(200).json_body(json!({
                "orders": [
                    { "id": 1001, "total_price": "12.50", "confirmed": true },
                    { "id": 1002, "total_price": "7.00", "cancel_reason": null }
                ]
            }));
        })
        .await;

    let resp = ctx.get("/orders").send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    mock.assert_async().await;

    assert_eq!(body["orders"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["orders"][0]["confirmed"], true);
    // Unset attributes are omitted, not emitted as null.
    assert!(body["orders"][1].get("cancel_reason").is_none());
}

#[tokio::test]
async fn test_list_orders_forwards_caller_filters() {
    let ctx = TestContext::new().await.unwrap();
    let mock = ctx
        .upstream
        .mock_async(|when, then| {
            when.method(GET)
                .path(TestContext::upstream_path("orders"))
                .query_param("limit", "5")
                .query_param("status", "any")
                .query_param("since_id", "900")
                .query_param("ids", "1,2,3");
            then.status(200).json_body(json!({ "orders": [] }));
        })
        .await;

    let resp = ctx
        .get("/orders?limit=5&status=any&since_id=900&ids=1,2,3")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    mock.assert_async().await;
    assert_eq!(resp.json::<Value>().await.unwrap(), json!({ "orders": [] }));
}

#[tokio::test]
async fn test_order_count() {
    let ctx = TestContext::new().await.unwrap();
    ctx.upstream
        .mock_async(|when, then| {
            when.method(GET)
                .path(TestContext::upstream_path("orders/count"))
                .query_param("status", "open");
            then.status(200).json_body(json!({ "count": 17 }));
        })
        .await;

    let resp = ctx.get("/orders/count").send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.json::<Value>().await.unwrap(), json!({ "count": 17 }));
}

#[tokio::test]
async fn test_order_count_rejects_list_only_status() {
    let ctx = TestContext::new().await.unwrap();

    let resp = ctx.get("/orders/count?status=cancelled").send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_single_order_with_nested_records() {
    let ctx = TestContext::new().await.unwrap();
    ctx.upstream
        .mock_async(|when, then| {
            when.method(GET)
                .path(TestContext::upstream_path("orders/450789469"));
            then.status(200).json_body(json!({
                "order": {
                    "id": 450_789_469,
                    "customer": { "id": 207_119_551, "state": "enabled" },
                    "discount_codes": [{ "code": "TENOFF", "amount": "10.00", "type": "fixed_amount" }]
                }
            }));
        })
        .await;

    let resp = ctx.get("/orders/450789469").send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["order"]["customer"]["id"], 207_119_551);
    assert_eq!(body["order"]["discount_codes"][0]["type"], "fixed_amount");
}

#[tokio::test]
async fn test_unknown_order_is_not_found() {
    let ctx = TestContext::new().await.unwrap();
    ctx.upstream
        .mock_async(|when, then| {
            when.method(GET).path(TestContext::upstream_path("orders/42"));
            then.status(404).json_body(json!({ "errors": "Not Found" }));
        })
        .await;

    let resp = ctx.get("/orders/42").send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_upstream_error_is_bad_gateway_without_details() {
    let ctx = TestContext::new().await.unwrap();
    ctx.upstream
        .mock_async(|when, then| {
            when.method(GET).path(TestContext::upstream_path("orders"));
            then.status(500).body("upstream exploded");
        })
        .await;

    let resp = ctx.get("/orders").send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "detail": "External service error" }));
}
