//! Order resource as returned by the Shopify Admin REST API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::customer::Customer;
use super::id::OrderId;
use super::params::Timestamp;

/// A discount code applied to an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountCode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Amount deducted, as a decimal string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    /// `fixed_amount`, `percentage` or `shipping`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// A store order.
///
/// Monetary amounts are decimal strings exactly as Shopify sends them.
/// `current_total_duties_set` and `refunds` are forwarded as opaque JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OrderId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer_accepts_marketing: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// ISO 4217 currency code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_subtotal_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_total_discounts: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_total_duties_set: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_total_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_total_tax: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_codes: Option<Vec<DiscountCode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_taxes: Option<bool>,
    /// Financial status as reported by the order (free-form, not a filter token).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,
    /// Display name, e.g. `#1001`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtotal_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxes_included: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_discounts: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_line_items_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_outstanding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tax: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tip_received: Option<String>,
    /// Total weight in grams.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_weight: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refunds: Option<Vec<Value>>,
}
