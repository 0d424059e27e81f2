//! Response envelopes.
//!
//! The proxy returns the same `{ "<resource>": ... }` wrappers the upstream
//! API uses, so these types serve for both decoding and encoding.

use serde::{Deserialize, Serialize};

use super::customer::Customer;
use super::order::Order;

/// Result of a `count.json` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: u64,
}

/// A list of orders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrdersResponse {
    pub orders: Vec<Order>,
}

/// A single order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub order: Order,
}

/// A list of customers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomersResponse {
    pub customers: Vec<Customer>,
}

/// A single customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerResponse {
    pub customer: Customer,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_count_envelope() {
        let count: CountResponse = serde_json::from_value(json!({ "count": 42 })).unwrap();
        assert_eq!(count.count, 42);
    }

    #[test]
    fn test_missing_envelope_key_is_an_error() {
        let body = json!({ "errors": "Not Found" });
        assert!(serde_json::from_value::<OrderResponse>(body.clone()).is_err());
        assert!(serde_json::from_value::<CountResponse>(body).is_err());
    }

    #[test]
    fn test_customers_envelope_round_trip_keeps_shape() {
        let body = json!({ "customers": [{ "id": 1, "tags": "vip" }, { "id": 2 }] });
        let decoded: CustomersResponse = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(decoded.customers.len(), 2);
        assert_eq!(serde_json::to_value(&decoded).unwrap(), body);
    }
}
