//! Raw order models from the Shopify Admin API
//!
//! These types mirror the subset of the `GET /admin/orders.json` payload the
//! pipeline consumes. Optional nested structures (shipping address, discount
//! codes, tax lines) deserialize to `None`/empty rather than failing, so a
//! sparsely populated order never aborts a run at the parsing stage.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

/// A paid order as returned by the platform (read-only input)
#[derive(Debug, Clone, Deserialize)]
pub struct RawOrder {
    /// Platform-assigned order id, monotonically increasing; drives the cursor
    pub id: u64,

    /// Human-facing sequential order number
    pub order_number: u64,

    /// Order creation timestamp; anchor for derived ship/deliver dates
    pub created_at: DateTime<Utc>,

    /// Ship-to block; absent for digital-only orders
    #[serde(default)]
    pub shipping_address: Option<ShippingAddress>,

    /// Customer contact email
    #[serde(default)]
    pub contact_email: Option<String>,

    /// Discount codes in application order. Only the first is honored
    /// downstream (documented single-code limitation).
    #[serde(default)]
    pub discount_codes: Vec<DiscountCode>,

    /// Grand total charged
    pub total_price: Decimal,

    /// Subtotal before tax and shipping
    pub subtotal_price: Decimal,

    /// Total tax across the order
    pub total_tax: Decimal,

    /// Total discounts across the order
    pub total_discounts: Decimal,

    /// Line items in listed order
    #[serde(default)]
    pub line_items: Vec<RawLineItem>,
}

/// One line item of an order
#[derive(Debug, Clone, Deserialize)]
pub struct RawLineItem {
    /// Stock keeping unit
    #[serde(default)]
    pub sku: Option<String>,

    /// Ordered quantity; the platform contract guarantees >= 1 but the
    /// pricing engine still guards the division
    pub quantity: u32,

    /// Regular per-unit price
    pub price: Decimal,

    /// Total discount applied to this line across all units
    pub total_discount: Decimal,

    /// Tax lines in listed order. Only the first is honored downstream
    /// (documented single-tax-line limitation).
    #[serde(default)]
    pub tax_lines: Vec<TaxLine>,
}

/// Ship-to address block
///
/// Every field is optional; missing values project to empty-string
/// sentinels in the normalized record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShippingAddress {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address1: Option<String>,
    #[serde(default)]
    pub address2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// A discount code applied to an order
#[derive(Debug, Clone, Deserialize)]
pub struct DiscountCode {
    /// The code text as entered at checkout (e.g. `SAVE10`)
    pub code: String,

    /// Discount type
    #[serde(rename = "type")]
    pub kind: DiscountType,

    /// Discount amount as reported by the platform
    pub amount: Decimal,
}

/// Discount type discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    /// Percentage discount; the rate is parsed from the code text, not from
    /// the platform's `amount` field
    Percentage,
    /// Fixed-amount discount; recorded for reference, not prorated into
    /// the unit price
    FixedAmount,
}

/// One tax line of a line item
#[derive(Debug, Clone, Deserialize)]
pub struct TaxLine {
    /// Tax charged for this line
    pub price: Decimal,

    /// Tax rate as a fraction (e.g. 0.06)
    pub rate: Decimal,
}
