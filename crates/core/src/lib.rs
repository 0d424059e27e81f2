//! Shop Admin Proxy Core - Shared types library.
//!
//! This crate provides the types exchanged between the proxy's HTTP surface
//! and the Shopify Admin REST API:
//! - filter parameter sets and their query-string serializers
//! - closed status enums accepted by the upstream filters
//! - resource entities (orders, customers) and response envelopes
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - IDs, statuses, filter parameters, entities and envelopes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
