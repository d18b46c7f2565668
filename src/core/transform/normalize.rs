//! Order flattening
//!
//! Turns the nested order payload into one flat record per (order, line
//! item) pair. Normalization is infallible: missing optional structures
//! become empty-string or `None` sentinels, never errors.

use crate::domain::order::{RawLineItem, RawOrder};
use crate::domain::record::{AppliedDiscount, NormalizedRecord};

/// Flattens fetched orders into normalized records
pub struct OrderNormalizer;

impl OrderNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Flatten a batch of orders
    ///
    /// Output preserves the batch order of orders and the listed order of
    /// line items within each order. An order with zero line items yields
    /// zero records but still occupies its `order_index`.
    pub fn normalize(&self, orders: &[RawOrder]) -> Vec<NormalizedRecord> {
        let mut records = Vec::new();

        for (order_pos, order) in orders.iter().enumerate() {
            let shipping = order.shipping_address.clone().unwrap_or_default();
            let discount = Self::first_discount(order);

            for (line_pos, line) in order.line_items.iter().enumerate() {
                let (tax_price, tax_rate) = Self::first_tax_line(line);

                records.push(NormalizedRecord {
                    order_index: order_pos + 1,
                    line_index: line_pos + 1,
                    order_id: order.id,
                    order_number: order.order_number,
                    created_at: order.created_at,
                    ship_name: field(&shipping.name),
                    ship_address1: field(&shipping.address1),
                    ship_address2: field(&shipping.address2),
                    ship_city: field(&shipping.city),
                    ship_state: field(&shipping.province),
                    ship_zip: field(&shipping.zip),
                    ship_country: field(&shipping.country),
                    ship_phone: field(&shipping.phone),
                    contact_email: field(&order.contact_email),
                    discount: discount.clone(),
                    total_price: order.total_price,
                    subtotal_price: order.subtotal_price,
                    total_tax: order.total_tax,
                    total_discounts: order.total_discounts,
                    sku: field(&line.sku),
                    quantity: line.quantity,
                    price: line.price,
                    total_discount: line.total_discount,
                    tax_price,
                    tax_rate,
                });
            }
        }

        tracing::debug!(
            orders = orders.len(),
            records = records.len(),
            "Normalized order batch"
        );

        records
    }

    /// The single honored discount code of an order (first listed)
    fn first_discount(order: &RawOrder) -> Option<AppliedDiscount> {
        order.discount_codes.first().map(|code| AppliedDiscount {
            code: code.code.clone(),
            kind: code.kind,
            amount: code.amount,
        })
    }

    /// The single honored tax line of a line item (first listed)
    fn first_tax_line(
        line: &RawLineItem,
    ) -> (Option<rust_decimal::Decimal>, Option<rust_decimal::Decimal>) {
        match line.tax_lines.first() {
            Some(tax) => (Some(tax.price), Some(tax.rate)),
            None => (None, None),
        }
    }
}

impl Default for OrderNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

fn field(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn order(id: u64, lines: serde_json::Value) -> RawOrder {
        serde_json::from_value(json!({
            "id": id,
            "order_number": 1000 + id,
            "created_at": "2016-09-09T10:00:00Z",
            "contact_email": "buyer@example.com",
            "shipping_address": {
                "name": "Jane Doe",
                "address1": "1 Main St",
                "city": "Springfield",
                "province": "NJ",
                "zip": "07081",
                "country": "United States"
            },
            "discount_codes": [
                { "code": "SAVE10", "type": "percentage", "amount": "10.00" }
            ],
            "total_price": "100.00",
            "subtotal_price": "90.00",
            "total_tax": "6.30",
            "total_discounts": "10.00",
            "line_items": lines
        }))
        .unwrap()
    }

    #[test]
    fn test_one_record_per_line_item() {
        let orders = vec![order(
            1,
            json!([
                { "sku": "A", "quantity": 1, "price": "40.00", "total_discount": "0.00" },
                { "sku": "B", "quantity": 2, "price": "25.00", "total_discount": "0.00" }
            ]),
        )];

        let records = OrderNormalizer::new().normalize(&orders);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sku, "A");
        assert_eq!(records[1].sku, "B");
    }

    #[test]
    fn test_indices_are_one_based_and_positional() {
        let orders = vec![
            order(
                501,
                json!([
                    { "sku": "A", "quantity": 1, "price": "10.00", "total_discount": "0.00" }
                ]),
            ),
            order(
                502,
                json!([
                    { "sku": "B", "quantity": 1, "price": "10.00", "total_discount": "0.00" },
                    { "sku": "C", "quantity": 1, "price": "10.00", "total_discount": "0.00" }
                ]),
            ),
        ];

        let records = OrderNormalizer::new().normalize(&orders);
        assert_eq!(
            records
                .iter()
                .map(|r| (r.order_index, r.line_index))
                .collect::<Vec<_>>(),
            vec![(1, 1), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn test_order_fields_copied_to_every_line() {
        let orders = vec![order(
            7,
            json!([
                { "sku": "A", "quantity": 1, "price": "40.00", "total_discount": "0.00" },
                { "sku": "B", "quantity": 2, "price": "25.00", "total_discount": "0.00" }
            ]),
        )];

        let records = OrderNormalizer::new().normalize(&orders);
        for record in &records {
            assert_eq!(record.order_id, 7);
            assert_eq!(record.order_number, 1007);
            assert_eq!(record.ship_name, "Jane Doe");
            assert_eq!(record.total_price, dec!(100.00));
            assert_eq!(record.discount.as_ref().unwrap().code, "SAVE10");
        }
    }

    #[test]
    fn test_missing_optionals_become_sentinels() {
        let orders: Vec<RawOrder> = vec![serde_json::from_value(json!({
            "id": 9,
            "order_number": 1009,
            "created_at": "2016-09-09T10:00:00Z",
            "total_price": "10.00",
            "subtotal_price": "10.00",
            "total_tax": "0.00",
            "total_discounts": "0.00",
            "line_items": [
                { "quantity": 1, "price": "10.00", "total_discount": "0.00" }
            ]
        }))
        .unwrap()];

        let records = OrderNormalizer::new().normalize(&orders);
        let record = &records[0];

        assert_eq!(record.ship_name, "");
        assert_eq!(record.ship_address1, "");
        assert_eq!(record.ship_phone, "");
        assert_eq!(record.contact_email, "");
        assert_eq!(record.sku, "");
        assert!(record.discount.is_none());
        assert!(record.tax_price.is_none());
        assert!(record.tax_rate.is_none());
    }

    #[test]
    fn test_only_first_tax_line_is_honored() {
        let orders = vec![order(
            3,
            json!([
                { "sku": "A", "quantity": 1, "price": "10.00", "total_discount": "0.00",
                  "tax_lines": [
                      { "price": "0.60", "rate": 0.06 },
                      { "price": "0.10", "rate": 0.01 }
                  ] }
            ]),
        )];

        let records = OrderNormalizer::new().normalize(&orders);
        assert_eq!(records[0].tax_price, Some(dec!(0.60)));
        assert_eq!(records[0].tax_rate, Some(dec!(0.06)));
    }

    #[test]
    fn test_empty_order_yields_no_records_but_holds_index() {
        let orders = vec![
            order(1, json!([])),
            order(
                2,
                json!([
                    { "sku": "A", "quantity": 1, "price": "10.00", "total_discount": "0.00" }
                ]),
            ),
        ];

        let records = OrderNormalizer::new().normalize(&orders);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].order_index, 2);
    }
}
