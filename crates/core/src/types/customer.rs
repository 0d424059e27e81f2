//! Customer resource as returned by the Shopify Admin REST API.
//!
//! Every attribute is optional: `fields=` selection returns partial objects,
//! and attributes that were not returned are omitted again when re-serialized.

use serde::{Deserialize, Serialize};

use super::id::CustomerId;
use super::params::Timestamp;

/// Email marketing consent details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMarketingConsent {
    /// Current state (e.g. `subscribed`, `not_subscribed`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Opt-in level (e.g. `single_opt_in`, `confirmed_opt_in`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opt_in_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consent_updated_at: Option<Timestamp>,
}

/// SMS marketing consent details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsMarketingConsent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opt_in_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consent_updated_at: Option<Timestamp>,
    /// Where consent was collected (e.g. `OTHER`, `SHOPIFY`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consent_collected_from: Option<String>,
}

/// A store customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CustomerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Legacy marketing flag; superseded by `email_marketing_consent`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepts_marketing: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orders_count: Option<i64>,
    /// Account state (`disabled`, `invited`, `enabled`, `declined`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Lifetime spend as a decimal string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_spent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_order_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_email: Option<bool>,
    /// Comma-separated tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_order_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepts_marketing_updated_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketing_opt_in_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_marketing_consent: Option<EmailMarketingConsent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sms_marketing_consent: Option<SmsMarketingConsent>,
}
