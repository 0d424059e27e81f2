//! Closed token sets accepted by the Shopify Admin REST filters.
//!
//! Each enum deserializes only from its exact upstream token, so an unknown
//! value is rejected where the request is decoded instead of being forwarded.

use serde::{Deserialize, Serialize};

/// Financial status filter for order listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinancialStatus {
    Authorized,
    Pending,
    Paid,
    PartiallyPaid,
    Refunded,
    Voided,
    PartiallyRefunded,
    Any,
    Unpaid,
}

impl FinancialStatus {
    /// Upstream token for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Authorized => "authorized",
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::PartiallyPaid => "partially_paid",
            Self::Refunded => "refunded",
            Self::Voided => "voided",
            Self::PartiallyRefunded => "partially_refunded",
            Self::Any => "any",
            Self::Unpaid => "unpaid",
        }
    }
}

/// Financial status filter for order counts.
///
/// The count endpoint accepts a narrower set than the listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderCountFinancialStatus {
    Authorized,
    Pending,
    Paid,
    Refunded,
    Voided,
    Any,
}

impl OrderCountFinancialStatus {
    /// Upstream token for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Authorized => "authorized",
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Refunded => "refunded",
            Self::Voided => "voided",
            Self::Any => "any",
        }
    }
}

/// Fulfillment status filter for orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentStatus {
    Shipped,
    Partial,
    Unshipped,
    Any,
    Unfulfilled,
}

impl FulfillmentStatus {
    /// Upstream token for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shipped => "shipped",
            Self::Partial => "partial",
            Self::Unshipped => "unshipped",
            Self::Any => "any",
            Self::Unfulfilled => "unfulfilled",
        }
    }
}

/// Order status filter for order listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Open,
    Closed,
    Cancelled,
    Any,
}

impl OrderStatus {
    /// Upstream token for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Cancelled => "cancelled",
            Self::Any => "any",
        }
    }
}

/// Order status filter for order counts (no `cancelled`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderCountStatus {
    Open,
    Closed,
    Any,
}

impl OrderCountStatus {
    /// Upstream token for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Any => "any",
        }
    }
}

/// Sort direction for customer search ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Upstream token for this direction (always upper case).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

macro_rules! impl_display_as_str {
    ($($name:ident),+ $(,)?) => {
        $(
            impl std::fmt::Display for $name {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

impl_display_as_str!(
    FinancialStatus,
    OrderCountFinancialStatus,
    FulfillmentStatus,
    OrderStatus,
    OrderCountStatus,
    SortDirection,
);
