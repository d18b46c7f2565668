//! Normalized and priced pipeline records
//!
//! A [`NormalizedRecord`] is one row per (order, line item) pair with every
//! order-level field copied verbatim onto the row. A [`PricedRecord`] adds
//! the cart-pricing block computed by the pricing engine.

use crate::domain::order::DiscountType;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// One flat record per (order, line item) pair
///
/// Invariant: all records sharing an `order_index` carry identical
/// order-level field values. Indexes are 1-based batch/sequence positions,
/// not derived from any platform id.
#[derive(Debug, Clone)]
pub struct NormalizedRecord {
    /// 1-based position of the order within the fetched batch
    pub order_index: usize,

    /// 1-based position of the line item within the order
    pub line_index: usize,

    /// Platform order id
    pub order_id: u64,

    /// Human-facing order number
    pub order_number: u64,

    /// Order creation timestamp
    pub created_at: DateTime<Utc>,

    /// Ship-to fields, empty-string sentinels when absent
    pub ship_name: String,
    pub ship_address1: String,
    pub ship_address2: String,
    pub ship_city: String,
    pub ship_state: String,
    pub ship_zip: String,
    pub ship_country: String,
    pub ship_phone: String,

    /// Contact email, empty-string sentinel when absent
    pub contact_email: String,

    /// First discount code of the order, if any (single-code limitation)
    pub discount: Option<AppliedDiscount>,

    /// Order totals copied verbatim
    pub total_price: Decimal,
    pub subtotal_price: Decimal,
    pub total_tax: Decimal,
    pub total_discounts: Decimal,

    /// Line-level fields
    pub sku: String,
    pub quantity: u32,
    pub price: Decimal,
    pub total_discount: Decimal,

    /// First tax line of the line item, if any (single-tax-line limitation)
    pub tax_price: Option<Decimal>,
    pub tax_rate: Option<Decimal>,
}

impl NormalizedRecord {
    /// The `ZC`-prefixed purchase-order number used on OMS documents
    pub fn po_number(&self) -> String {
        format!("ZC{}", self.order_number)
    }
}

/// The single honored discount code of an order
#[derive(Debug, Clone)]
pub struct AppliedDiscount {
    pub code: String,
    pub kind: DiscountType,
    pub amount: Decimal,
}

/// Cart-pricing block computed per record
#[derive(Debug, Clone)]
pub struct CartPricing {
    /// The line's regular per-unit price
    pub regular_price: Decimal,

    /// regular_price minus the prorated line discount per unit
    pub cart_price: Decimal,

    /// Sum of cart_price * quantity over all lines of the order,
    /// broadcast identically to every line of that order
    pub cart_subtotal: Decimal,

    /// Percentage rate parsed from the discount code text
    /// (percentage discounts only)
    pub discount_percent_rate: Option<Decimal>,

    /// cart_price * discount_percent_rate (percentage discounts only)
    pub discount_percent_amount: Option<Decimal>,

    /// The platform-reported amount of a fixed discount; recorded for
    /// reference, never subtracted into unit_price
    pub discount_fixed_amount: Option<Decimal>,

    /// Final effective per-unit price
    pub unit_price: Decimal,
}

/// A normalized record plus its cart pricing
#[derive(Debug, Clone)]
pub struct PricedRecord {
    pub record: NormalizedRecord,
    pub pricing: CartPricing,
}
