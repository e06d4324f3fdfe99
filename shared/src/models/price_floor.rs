//! Price Floor Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Minimum allowed price for a category
///
/// Keyed by category name. A floor can only be set for a registered
/// category, follows the category on rename and is dropped with it on
/// delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceFloor {
    pub category: String,
    /// Minimum price in major currency units, serialized as a decimal string
    #[serde(with = "rust_decimal::serde::str")]
    pub min_price: Decimal,
}
