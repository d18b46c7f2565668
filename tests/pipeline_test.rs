//! Integration tests for the transform -> pricing -> projection pipeline
//!
//! These tests drive the stages with raw order payloads, no HTTP involved.

use rust_decimal_macros::dec;
use serde_json::json;
use shopsync::config::ImportConfig;
use shopsync::core::pricing::PricingEngine;
use shopsync::core::project::RecordProjector;
use shopsync::core::transform::OrderNormalizer;
use shopsync::domain::order::RawOrder;

fn run_pipeline(orders: Vec<RawOrder>) -> Vec<shopsync::domain::record::PricedRecord> {
    let records = OrderNormalizer::new().normalize(&orders);
    PricingEngine::new().price(records).unwrap()
}

fn order_from(value: serde_json::Value) -> RawOrder {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_undiscounted_order_prices_pass_through() {
    let priced = run_pipeline(vec![order_from(json!({
        "id": 1,
        "order_number": 1001,
        "created_at": "2016-09-09T10:00:00Z",
        "total_price": "150.00",
        "subtotal_price": "150.00",
        "total_tax": "0.00",
        "total_discounts": "0.00",
        "line_items": [
            { "sku": "A", "quantity": 2, "price": "75.00", "total_discount": "0.00" }
        ]
    }))]);

    let pricing = &priced[0].pricing;
    assert_eq!(pricing.regular_price, dec!(75.00));
    assert_eq!(pricing.cart_price, dec!(75.00));
    assert_eq!(pricing.unit_price, dec!(75.00));
    assert_eq!(pricing.cart_subtotal, dec!(150.00));
}

#[test]
fn test_cart_subtotal_identical_on_every_line_of_an_order() {
    let priced = run_pipeline(vec![order_from(json!({
        "id": 2,
        "order_number": 1002,
        "created_at": "2016-09-09T10:00:00Z",
        "total_price": "190.00",
        "subtotal_price": "190.00",
        "total_tax": "0.00",
        "total_discounts": "0.00",
        "line_items": [
            { "sku": "A", "quantity": 1, "price": "100.00", "total_discount": "0.00" },
            { "sku": "B", "quantity": 2, "price": "50.00", "total_discount": "10.00" }
        ]
    }))]);

    assert_eq!(priced.len(), 2);
    let first = priced[0].pricing.cart_subtotal;
    assert!(priced.iter().all(|p| p.pricing.cart_subtotal == first));
}

#[test]
fn test_percentage_rate_comes_from_the_code_text() {
    for (code, rate) in [("SAVE10", dec!(0.10)), ("PROMO05", dec!(0.05))] {
        let priced = run_pipeline(vec![order_from(json!({
            "id": 3,
            "order_number": 1003,
            "created_at": "2016-09-09T10:00:00Z",
            "discount_codes": [
                { "code": code, "type": "percentage", "amount": "99.99" }
            ],
            "total_price": "100.00",
            "subtotal_price": "100.00",
            "total_tax": "0.00",
            "total_discounts": "0.00",
            "line_items": [
                { "sku": "A", "quantity": 1, "price": "100.00", "total_discount": "0.00" }
            ]
        }))]);

        // The platform-reported amount is ignored for the rate
        assert_eq!(priced[0].pricing.discount_percent_rate, Some(rate));
        assert_eq!(
            priced[0].pricing.unit_price,
            dec!(100.00) * (dec!(1) - rate)
        );
    }
}

#[test]
fn test_fixed_amount_discount_never_touches_unit_price() {
    let priced = run_pipeline(vec![order_from(json!({
        "id": 4,
        "order_number": 1004,
        "created_at": "2016-09-09T10:00:00Z",
        "discount_codes": [
            { "code": "FIVEOFF", "type": "fixed_amount", "amount": "5.00" }
        ],
        "total_price": "95.00",
        "subtotal_price": "100.00",
        "total_tax": "0.00",
        "total_discounts": "5.00",
        "line_items": [
            { "sku": "A", "quantity": 1, "price": "100.00", "total_discount": "0.00" }
        ]
    }))]);

    let pricing = &priced[0].pricing;
    assert_eq!(pricing.discount_fixed_amount, Some(dec!(5.00)));
    assert_eq!(pricing.unit_price, dec!(100.00));
    assert!(pricing.discount_percent_rate.is_none());
}

#[test]
fn test_save20_order_end_to_end() {
    let priced = run_pipeline(vec![order_from(json!({
        "id": 91234,
        "order_number": 1052,
        "created_at": "2016-09-09T10:00:00Z",
        "discount_codes": [
            { "code": "SAVE20", "type": "percentage", "amount": "38.00" }
        ],
        "total_price": "152.00",
        "subtotal_price": "190.00",
        "total_tax": "0.00",
        "total_discounts": "38.00",
        "line_items": [
            { "sku": "A", "quantity": 1, "price": "100.00", "total_discount": "0.00" },
            { "sku": "B", "quantity": 2, "price": "50.00", "total_discount": "10.00" }
        ]
    }))]);

    // Line A: cart 100.00; line B: 50.00 - 10.00/2 = 45.00
    assert_eq!(priced[0].pricing.cart_price, dec!(100.00));
    assert_eq!(priced[1].pricing.cart_price, dec!(45.00));

    // Subtotal 100*1 + 45*2 = 190 on both lines
    assert_eq!(priced[0].pricing.cart_subtotal, dec!(190.00));
    assert_eq!(priced[1].pricing.cart_subtotal, dec!(190.00));

    // 20% off both unit prices
    assert_eq!(priced[0].pricing.discount_percent_rate, Some(dec!(0.20)));
    assert_eq!(priced[0].pricing.unit_price, dec!(80.00));
    assert_eq!(priced[1].pricing.unit_price, dec!(36.00));
}

#[test]
fn test_missing_shipping_address_projects_empty_columns() {
    let priced = run_pipeline(vec![order_from(json!({
        "id": 5,
        "order_number": 1005,
        "created_at": "2016-09-09T10:00:00Z",
        "total_price": "10.00",
        "subtotal_price": "10.00",
        "total_tax": "0.00",
        "total_discounts": "0.00",
        "line_items": [
            { "sku": "A", "quantity": 1, "price": "10.00", "total_discount": "0.00" }
        ]
    }))]);

    let projector = RecordProjector::new(ImportConfig::default());
    let rows = projector.to_import(&priced, 1);

    assert_eq!(rows[0].ship_name, "");
    assert_eq!(rows[0].ship_address1, "");
    assert_eq!(rows[0].ship_city, "");
    // The row is still fully formed
    assert_eq!(rows[0].po_number, "ZC1005");
    assert_eq!(rows[0].qty_ordered, 1);
}

#[test]
fn test_projection_stamps_one_document_number_per_run() {
    let priced = run_pipeline(vec![
        order_from(json!({
            "id": 6,
            "order_number": 1006,
            "created_at": "2016-09-09T10:00:00Z",
            "total_price": "10.00",
            "subtotal_price": "10.00",
            "total_tax": "0.00",
            "total_discounts": "0.00",
            "line_items": [
                { "sku": "A", "quantity": 1, "price": "10.00", "total_discount": "0.00" }
            ]
        })),
        order_from(json!({
            "id": 7,
            "order_number": 1007,
            "created_at": "2016-09-09T10:00:00Z",
            "total_price": "20.00",
            "subtotal_price": "20.00",
            "total_tax": "0.00",
            "total_discounts": "0.00",
            "line_items": [
                { "sku": "B", "quantity": 1, "price": "20.00", "total_discount": "0.00" },
                { "sku": "C", "quantity": 1, "price": "20.00", "total_discount": "0.00" }
            ]
        })),
    ]);

    let projector = RecordProjector::new(ImportConfig::default());
    let rows = projector.to_import(&priced, 9);

    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|row| row.document_no == 9));

    // Archive keeps full fidelity alongside
    let archive = projector.to_archive(&priced);
    assert_eq!(archive.len(), 3);
    assert_eq!(archive[0].po_number, "ZC1006");
    assert_eq!(archive[2].shopify_order_id, 7);
}
