//! Wire envelopes for the Shopify Admin API

use crate::domain::order::RawOrder;
use serde::Deserialize;

/// Response body of `GET /admin/orders.json`
#[derive(Debug, Deserialize)]
pub struct OrdersResponse {
    pub orders: Vec<RawOrder>,
}
