//! Shopify Admin API adapter
//!
//! The only outbound integration of the pipeline. Everything platform
//! specific (endpoint shape, auth, wire envelopes, request pacing) lives
//! here; the rest of the crate works on domain types.

pub mod client;
pub mod models;
pub mod throttle;

pub use client::OrderFetcher;
pub use throttle::Throttle;
