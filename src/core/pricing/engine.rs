//! Cart pricing engine
//!
//! Computes the per-record pricing block: the discount-prorated cart
//! price, the order-level cart subtotal broadcast to every line of the
//! order, and the final effective unit price after discount-code
//! resolution.

use crate::core::pricing::discount;
use crate::domain::order::DiscountType;
use crate::domain::record::{CartPricing, NormalizedRecord, PricedRecord};
use crate::domain::errors::SyncError;
use crate::domain::result::Result;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Prices normalized records
pub struct PricingEngine;

impl PricingEngine {
    pub fn new() -> Self {
        Self
    }

    /// Price a batch of normalized records
    ///
    /// Cart subtotals are accumulated in a single grouping pass keyed by
    /// `order_index` and then broadcast, so every line of an order carries
    /// the identical subtotal regardless of its position in the batch.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Pricing` when a line reports zero quantity or
    /// a percentage discount code has no parseable two-digit suffix.
    /// Either condition aborts the whole run.
    pub fn price(&self, records: Vec<NormalizedRecord>) -> Result<Vec<PricedRecord>> {
        // Pass one: prorate line discounts and accumulate per-order subtotals
        let mut cart_prices = Vec::with_capacity(records.len());
        let mut subtotals: HashMap<usize, Decimal> = HashMap::new();

        for record in &records {
            if record.quantity == 0 {
                return Err(SyncError::Pricing(format!(
                    "Order {} line {} has zero quantity",
                    record.order_number, record.line_index
                )));
            }

            let quantity = Decimal::from(record.quantity);
            let cart_price = record.price - record.total_discount / quantity;
            *subtotals.entry(record.order_index).or_default() += cart_price * quantity;
            cart_prices.push(cart_price);
        }

        // Pass two: broadcast subtotals and resolve the discount code
        let mut priced = Vec::with_capacity(records.len());

        for (record, cart_price) in records.into_iter().zip(cart_prices) {
            let cart_subtotal = subtotals[&record.order_index];
            let pricing = Self::resolve_discount(&record, cart_price, cart_subtotal)?;
            priced.push(PricedRecord { record, pricing });
        }

        tracing::debug!(records = priced.len(), "Priced record batch");

        Ok(priced)
    }

    /// Build the pricing block for one record
    ///
    /// Percentage codes reduce the unit price by the rate encoded in the
    /// code text. Fixed-amount codes are recorded for reference but leave
    /// the unit price at the cart price, matching the documented OMS
    /// contract.
    fn resolve_discount(
        record: &NormalizedRecord,
        cart_price: Decimal,
        cart_subtotal: Decimal,
    ) -> Result<CartPricing> {
        let mut pricing = CartPricing {
            regular_price: record.price,
            cart_price,
            cart_subtotal,
            discount_percent_rate: None,
            discount_percent_amount: None,
            discount_fixed_amount: None,
            unit_price: cart_price,
        };

        match &record.discount {
            None => {}
            Some(applied) => match applied.kind {
                DiscountType::Percentage => {
                    let rate = discount::percentage_rate(&applied.code)?;
                    pricing.discount_percent_rate = Some(rate);
                    pricing.discount_percent_amount = Some(cart_price * rate);
                    pricing.unit_price = cart_price * (Decimal::ONE - rate);
                }
                DiscountType::FixedAmount => {
                    pricing.discount_fixed_amount = Some(applied.amount);
                }
            },
        }

        Ok(pricing)
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new()
    }
}
