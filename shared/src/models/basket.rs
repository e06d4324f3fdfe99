//! Basket Model

use serde::{Deserialize, Serialize};

/// One entry in a caller's basket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasketEntry {
    pub product_id: String,
    pub quantity: u32,
}

/// Add-to-basket payload
///
/// Setting a quantity for a product already in the basket overwrites it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasketAdd {
    pub product_id: String,
    pub quantity: u32,
}
