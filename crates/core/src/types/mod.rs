//! Core types for the shop admin proxy.

pub mod customer;
pub mod fields;
pub mod id;
pub mod order;
pub mod params;
pub mod query;
pub mod response;
pub mod status;

pub use customer::{Customer, EmailMarketingConsent, SmsMarketingConsent};
pub use fields::*;
pub use id::*;
pub use order::{DiscountCode, Order};
pub use params::*;
pub use query::{QueryPairs, ToQueryString};
pub use response::*;
pub use status::*;
