//! Shop Admin Proxy library.
//!
//! Exposes a read-only slice of the Shopify Admin REST API (orders and
//! customers) behind bearer authentication, for use as a chat plugin.
//!
//! # Security
//!
//! The process holds a Shopify Admin API access token. Callers never see it;
//! they authenticate with the separate `BEARER_TOKEN`.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod shopify;
pub mod state;
