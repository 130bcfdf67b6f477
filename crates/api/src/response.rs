//! Response bodies for successful comics requests.

use serde::Serialize;

/// `{ "success": true }`, returned by create, change-price and delete.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// `{ "price": n }`, returned by the price lookup.
#[derive(Debug, Serialize)]
pub struct PriceResponse {
    pub price: u64,
}
