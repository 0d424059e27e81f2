//! Field selections sent as `fields=` to narrow upstream responses.
//!
//! Smaller selections keep the proxied payloads short; the full lists name every
//! attribute the resource entities in this crate model.

/// Default field selection for order lookups and listings.
pub const DEFAULT_ORDER_FIELDS: &str = "id,buyer_accepts_marketing,cancel_reason,cancelled_at,closed_at,confirmed,created_at,total_price,updated_at";

/// Every order attribute modelled by [`crate::Order`].
pub const ORDER_FIELDS: &str = "id,customer,buyer_accepts_marketing,cancel_reason,cancelled_at,closed_at,confirmed,created_at,currency,current_subtotal_price,current_total_discounts,current_total_duties_set,current_total_price,current_total_tax,discount_codes,estimated_taxes,financial_status,fulfillment_status,name,note,processed_at,source_url,subtotal_price,tags,taxes_included,total_discounts,total_line_items_price,total_outstanding,total_price,total_tax,total_tip_received,total_weight,updated_at,refunds";

/// Default field selection for customer lookups and searches.
pub const DEFAULT_CUSTOMER_FIELDS: &str = "id,accepts_marketing,created_at,updated_at,orders_count,state,total_spent,tags,accepts_marketing_updated_at";

/// Customer attributes modelled by [`crate::Customer`], excluding contact details.
pub const CUSTOMER_FIELDS: &str = "id,accepts_marketing,created_at,updated_at,orders_count,state,total_spent,last_order_name,last_order_id,note,verified_email,tags,accepts_marketing_updated_at,marketing_opt_in_level,email_marketing_consent,sms_marketing_consent";

#[cfg(test)]
mod tests {
    use super::*;

    fn split(list: &str) -> Vec<&str> {
        list.split(',').collect()
    }

    #[test]
    fn test_defaults_are_subsets_of_full_lists() {
        let orders = split(ORDER_FIELDS);
        assert!(split(DEFAULT_ORDER_FIELDS).iter().all(|f| orders.contains(f)));

        let customers = split(CUSTOMER_FIELDS);
        assert!(
            split(DEFAULT_CUSTOMER_FIELDS)
                .iter()
                .all(|f| customers.contains(f))
        );
    }

    #[test]
    fn test_lists_have_no_blank_entries() {
        for list in [
            DEFAULT_ORDER_FIELDS,
            ORDER_FIELDS,
            DEFAULT_CUSTOMER_FIELDS,
            CUSTOMER_FIELDS,
        ] {
            assert!(split(list).iter().all(|f| !f.trim().is_empty()));
        }
    }
}
