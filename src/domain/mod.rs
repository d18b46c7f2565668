//! Domain models and types for shopsync.
//!
//! This module contains the core domain models, types, and business rules.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Raw platform models** ([`RawOrder`], [`RawLineItem`], [`DiscountCode`])
//! - **Pipeline records** ([`NormalizedRecord`], [`PricedRecord`], [`CartPricing`])
//! - **Error types** ([`SyncError`], [`ShopifyError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`]:
//!
//! ```rust
//! use shopsync::domain::{Result, SyncError};
//!
//! fn example() -> Result<()> {
//!     Err(SyncError::State("cursor file unreadable".to_string()))
//! }
//! ```

pub mod errors;
pub mod order;
pub mod record;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{ShopifyError, SyncError};
pub use order::{DiscountCode, DiscountType, RawLineItem, RawOrder, ShippingAddress, TaxLine};
pub use record::{AppliedDiscount, CartPricing, NormalizedRecord, PricedRecord};
pub use result::Result;
