//! OMS import row shape
//!
//! The import CSV carries the fixed column set the order management
//! system ingests. Column names and ordering are part of the OMS
//! contract and must not change; the `#[serde(rename)]` attributes pin
//! the header exactly.

use crate::config::ImportConfig;
use crate::core::project::archive::discount_type_label;
use crate::domain::record::PricedRecord;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Days from order creation to the expected ship date
const EXPECTED_SHIP_OFFSET_DAYS: i64 = 5;

/// Days from order creation to the deliver-by date
const DELIVER_BY_OFFSET_DAYS: i64 = 10;

/// One OMS import CSV row
///
/// Field order here is the column order of the emitted file.
#[derive(Debug, Serialize)]
pub struct ImportRow {
    #[serde(rename = "ISACONTROLNO")]
    pub isa_control_no: String,
    #[serde(rename = "DOCUMENTNO")]
    pub document_no: u64,
    #[serde(rename = "ISAID")]
    pub isa_id: String,
    #[serde(rename = "SHPNAME")]
    pub ship_name: String,
    #[serde(rename = "SHPADDR1")]
    pub ship_address1: String,
    #[serde(rename = "SHPADDR2")]
    pub ship_address2: String,
    #[serde(rename = "SHPADDR3")]
    pub ship_address3: String,
    #[serde(rename = "SHPADDR4")]
    pub ship_address4: String,
    #[serde(rename = "SHPCITY")]
    pub ship_city: String,
    #[serde(rename = "SHPSTATE")]
    pub ship_state: String,
    #[serde(rename = "SHPZIP")]
    pub ship_zip: String,
    #[serde(rename = "SHPCOUNTRY")]
    pub ship_country: String,
    #[serde(rename = "SHPPHONE")]
    pub ship_phone: String,
    #[serde(rename = "SHPEMAIL")]
    pub ship_email: String,
    #[serde(rename = "PONUMBER")]
    pub po_number: String,
    #[serde(rename = "REFERENCE")]
    pub reference: String,
    #[serde(rename = "ORDDATE")]
    pub order_date: String,
    #[serde(rename = "EXPDATE")]
    pub expected_ship_date: String,
    #[serde(rename = "DELVBYDATE")]
    pub deliver_by_date: String,
    #[serde(rename = "WHCODE")]
    pub warehouse_code: String,
    #[serde(rename = "STATUS")]
    pub status: String,
    #[serde(rename = "OPTORD01")]
    pub opt_ord01: String,
    #[serde(rename = "OPTORD02")]
    pub opt_ord02: String,
    #[serde(rename = "OPTORD03")]
    pub opt_ord03: String,
    #[serde(rename = "OPTORD04")]
    pub opt_ord04: String,
    #[serde(rename = "OPTORD05")]
    pub opt_ord05: String,
    #[serde(rename = "OPTORD06")]
    pub opt_ord06: String,
    #[serde(rename = "OPTORD07")]
    pub opt_ord07: String,
    #[serde(rename = "OPTORD08")]
    pub opt_ord08: String,
    #[serde(rename = "OPTORD09")]
    pub opt_ord09: String,
    #[serde(rename = "OPTORD10")]
    pub opt_ord10: String,
    #[serde(rename = "OPTORD11")]
    pub opt_ord11: String,
    #[serde(rename = "OPTORD12")]
    pub opt_ord12: String,
    #[serde(rename = "OPTORD13")]
    pub opt_ord13: String,
    #[serde(rename = "OPTORD14")]
    pub opt_ord14: String,
    #[serde(rename = "OPTORD15")]
    pub opt_ord15: String,
    #[serde(rename = "LINENUM")]
    pub line_num: usize,
    #[serde(rename = "ITEM")]
    pub item: String,
    #[serde(rename = "QTYORDERED")]
    pub qty_ordered: u32,
    #[serde(rename = "ORDUNIT")]
    pub order_unit: String,
    #[serde(rename = "OPTITM01")]
    pub opt_itm01: String,
    #[serde(rename = "OPTITM02")]
    pub opt_itm02: String,
    #[serde(rename = "OPTITM03")]
    pub opt_itm03: String,
    #[serde(rename = "OPTITM04")]
    pub opt_itm04: String,
    #[serde(rename = "OPTITM05")]
    pub opt_itm05: String,
    #[serde(rename = "OPTITM06")]
    pub opt_itm06: String,
    #[serde(rename = "OPTITM07")]
    pub opt_itm07: String,
    #[serde(rename = "OPTITM08")]
    pub opt_itm08: String,
    #[serde(rename = "OPTITM09")]
    pub opt_itm09: String,
    #[serde(rename = "OPTITM10")]
    pub opt_itm10: String,
}

impl ImportRow {
    /// Project one priced record into its import row
    ///
    /// Every row of a run carries the same `document_no`; the stamp is
    /// derived from the cursor, not from any platform id.
    pub fn from_priced(priced: &PricedRecord, document_no: u64, config: &ImportConfig) -> Self {
        let record = &priced.record;
        let pricing = &priced.pricing;

        let (discount_type, discount_code, discount_amount) = match &record.discount {
            Some(applied) => (
                discount_type_label(applied.kind).to_string(),
                applied.code.clone(),
                applied.amount.to_string(),
            ),
            None => (String::new(), String::new(), String::new()),
        };

        Self {
            isa_control_no: String::new(),
            document_no,
            isa_id: config.isa_id.clone(),
            ship_name: record.ship_name.clone(),
            ship_address1: record.ship_address1.clone(),
            ship_address2: record.ship_address2.clone(),
            ship_address3: String::new(),
            ship_address4: String::new(),
            ship_city: record.ship_city.clone(),
            ship_state: record.ship_state.clone(),
            ship_zip: record.ship_zip.clone(),
            ship_country: record.ship_country.clone(),
            ship_phone: record.ship_phone.clone(),
            ship_email: record.contact_email.clone(),
            po_number: record.po_number(),
            reference: record.order_number.to_string(),
            order_date: oms_date(record.created_at, 0),
            expected_ship_date: oms_date(record.created_at, EXPECTED_SHIP_OFFSET_DAYS),
            deliver_by_date: oms_date(record.created_at, DELIVER_BY_OFFSET_DAYS),
            warehouse_code: config.warehouse_code.clone(),
            status: config.status.clone(),
            opt_ord01: record.order_number.to_string(),
            opt_ord02: record.total_price.to_string(),
            opt_ord03: record.subtotal_price.to_string(),
            opt_ord04: record.total_tax.to_string(),
            opt_ord05: discount_type,
            opt_ord06: discount_code,
            opt_ord07: discount_amount,
            opt_ord08: optional_decimal(pricing.discount_fixed_amount),
            opt_ord09: record.total_discounts.to_string(),
            opt_ord10: config.ship_method.clone(),
            opt_ord11: String::new(),
            opt_ord12: String::new(),
            opt_ord13: String::new(),
            opt_ord14: String::new(),
            opt_ord15: String::new(),
            line_num: record.line_index,
            item: record.sku.clone(),
            qty_ordered: record.quantity,
            order_unit: config.order_unit.clone(),
            opt_itm01: optional_decimal(record.tax_price),
            // Recycling fee slot; populated once the fee table lands
            opt_itm02: String::new(),
            opt_itm03: optional_decimal(pricing.discount_percent_amount),
            opt_itm04: pricing.cart_price.to_string(),
            opt_itm05: pricing.regular_price.to_string(),
            opt_itm06: String::new(),
            opt_itm07: String::new(),
            opt_itm08: String::new(),
            opt_itm09: String::new(),
            opt_itm10: String::new(),
        }
    }
}

fn oms_date(instant: DateTime<Utc>, offset_days: i64) -> String {
    (instant + Duration::days(offset_days))
        .format("%Y-%m-%d")
        .to_string()
}

fn optional_decimal(value: Option<rust_decimal::Decimal>) -> String {
    value.map(|d| d.to_string()).unwrap_or_default()
}
