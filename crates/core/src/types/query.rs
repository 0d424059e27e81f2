//! Query-string serialization for upstream filter parameters.
//!
//! Values are form-urlencoded, so a space becomes `+` and reserved characters
//! are percent-encoded. Unpopulated values are skipped entirely.

use std::fmt::Display;

use chrono::{DateTime, FixedOffset};
use url::form_urlencoded;

/// Conversion of a filter parameter set into an upstream query string.
pub trait ToQueryString {
    /// Serialize the populated fields as `key=value` pairs joined by `&`.
    ///
    /// Returns an empty string when no field is populated.
    fn to_query_string(&self) -> String;
}

/// Builder for a form-urlencoded query string that only records populated values.
///
/// ```rust
/// use shop_admin_proxy_core::QueryPairs;
///
/// let query = QueryPairs::new()
///     .text("fields", Some("id,name"))
///     .text("ids", None)
///     .display("limit", Some(5))
///     .finish();
/// assert_eq!(query, "fields=id%2Cname&limit=5");
/// ```
pub struct QueryPairs {
    serializer: form_urlencoded::Serializer<'static, String>,
}

impl QueryPairs {
    /// Start an empty query string.
    #[must_use]
    pub fn new() -> Self {
        Self {
            serializer: form_urlencoded::Serializer::new(String::new()),
        }
    }

    /// Append a free-text value. Empty strings count as unpopulated.
    #[must_use]
    pub fn text(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.serializer.append_pair(key, value);
        }
        self
    }

    /// Append a value through its `Display` form (integers, status tokens).
    #[must_use]
    pub fn display<T: Display>(mut self, key: &str, value: Option<T>) -> Self {
        if let Some(value) = value {
            self.serializer.append_pair(key, &value.to_string());
        }
        self
    }

    /// Append an ISO-8601 / RFC 3339 timestamp, keeping its UTC offset.
    #[must_use]
    pub fn timestamp(mut self, key: &str, value: Option<&DateTime<FixedOffset>>) -> Self {
        if let Some(value) = value {
            self.serializer.append_pair(key, &value.to_rfc3339());
        }
        self
    }

    /// Finish and return the encoded query string (without a leading `?`).
    #[must_use]
    pub fn finish(mut self) -> String {
        self.serializer.finish()
    }
}

impl Default for QueryPairs {
    fn default() -> Self {
        Self::new()
    }
}
