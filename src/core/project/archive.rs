//! Archive row shape
//!
//! The archive CSV is the full-fidelity record of what the pipeline saw
//! and computed: every normalized field plus the whole pricing block, one
//! row per (order, line item) pair. Field names are the CSV header.

use crate::domain::order::DiscountType;
use crate::domain::record::PricedRecord;
use rust_decimal::Decimal;
use serde::Serialize;

/// One archive CSV row
#[derive(Debug, Serialize)]
pub struct ArchiveRow {
    pub order_index: usize,
    pub line_index: usize,
    pub shopify_order_id: u64,
    pub order_number: u64,
    pub po_number: String,
    pub created_at: String,
    pub ship_name: String,
    pub ship_address1: String,
    pub ship_address2: String,
    pub ship_city: String,
    pub ship_state: String,
    pub ship_zip: String,
    pub ship_country: String,
    pub ship_phone: String,
    pub contact_email: String,
    pub discount_code: String,
    pub discount_type: String,
    pub discount_amount: String,
    pub total_price: Decimal,
    pub subtotal_price: Decimal,
    pub total_tax: Decimal,
    pub total_discounts: Decimal,
    pub sku: String,
    pub quantity: u32,
    pub regular_price: Decimal,
    pub cart_price: Decimal,
    pub cart_subtotal: Decimal,
    pub discount_percent_rate: String,
    pub discount_percent_amount: String,
    pub discount_fixed_amount: String,
    pub unit_price: Decimal,
    pub tax_price: String,
    pub tax_rate: String,
}

impl ArchiveRow {
    /// Project one priced record into its archive row
    pub fn from_priced(priced: &PricedRecord) -> Self {
        let record = &priced.record;
        let pricing = &priced.pricing;

        let (discount_code, discount_type, discount_amount) = match &record.discount {
            Some(applied) => (
                applied.code.clone(),
                discount_type_label(applied.kind).to_string(),
                applied.amount.to_string(),
            ),
            None => (String::new(), String::new(), String::new()),
        };

        Self {
            order_index: record.order_index,
            line_index: record.line_index,
            shopify_order_id: record.order_id,
            order_number: record.order_number,
            po_number: record.po_number(),
            created_at: record.created_at.to_rfc3339(),
            ship_name: record.ship_name.clone(),
            ship_address1: record.ship_address1.clone(),
            ship_address2: record.ship_address2.clone(),
            ship_city: record.ship_city.clone(),
            ship_state: record.ship_state.clone(),
            ship_zip: record.ship_zip.clone(),
            ship_country: record.ship_country.clone(),
            ship_phone: record.ship_phone.clone(),
            contact_email: record.contact_email.clone(),
            discount_code,
            discount_type,
            discount_amount,
            total_price: record.total_price,
            subtotal_price: record.subtotal_price,
            total_tax: record.total_tax,
            total_discounts: record.total_discounts,
            sku: record.sku.clone(),
            quantity: record.quantity,
            regular_price: pricing.regular_price,
            cart_price: pricing.cart_price,
            cart_subtotal: pricing.cart_subtotal,
            discount_percent_rate: optional_decimal(pricing.discount_percent_rate),
            discount_percent_amount: optional_decimal(pricing.discount_percent_amount),
            discount_fixed_amount: optional_decimal(pricing.discount_fixed_amount),
            unit_price: pricing.unit_price,
            tax_price: optional_decimal(record.tax_price),
            tax_rate: optional_decimal(record.tax_rate),
        }
    }
}

/// Stable label for a discount type in CSV output
pub fn discount_type_label(kind: DiscountType) -> &'static str {
    match kind {
        DiscountType::Percentage => "percentage",
        DiscountType::FixedAmount => "fixed_amount",
    }
}

fn optional_decimal(value: Option<Decimal>) -> String {
    value.map(|d| d.to_string()).unwrap_or_default()
}
