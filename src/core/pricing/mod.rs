//! Cart pricing stage
//!
//! Discount proration, per-order subtotal broadcast, and discount-code
//! resolution into the final effective unit price.

pub mod discount;
pub mod engine;

pub use engine::PricingEngine;
