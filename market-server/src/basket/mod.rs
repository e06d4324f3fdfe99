//! Basket Store
//!
//! Per-caller baskets keyed by caller identity. A basket comes into
//! existence on first add and disappears when cleared; reading a caller
//! with no basket yields an empty list rather than an error.

use dashmap::DashMap;
use shared::models::BasketEntry;
use shared::{AppError, AppResult, ErrorCode};

#[derive(Debug, Default)]
pub struct BasketStore {
    baskets: DashMap<String, Vec<BasketEntry>>,
}

impl BasketStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quantity for a product in the caller's basket. An existing
    /// entry is overwritten, not accumulated. The caller is responsible for
    /// checking the product exists.
    pub fn add(&self, caller: &str, product_id: String, quantity: u32) -> AppResult<Vec<BasketEntry>> {
        if quantity == 0 {
            return Err(AppError::new(ErrorCode::InvalidQuantity)
                .with_detail("quantity", quantity));
        }

        let mut basket = self.baskets.entry(caller.to_string()).or_default();
        if let Some(entry) = basket.iter_mut().find(|e| e.product_id == product_id) {
            entry.quantity = quantity;
        } else {
            basket.push(BasketEntry {
                product_id,
                quantity,
            });
        }
        Ok(basket.clone())
    }

    /// Remove one product from the caller's basket.
    pub fn remove(&self, caller: &str, product_id: &str) -> AppResult<Vec<BasketEntry>> {
        let mut basket = self
            .baskets
            .get_mut(caller)
            .ok_or_else(|| AppError::new(ErrorCode::BasketNotFound))?;

        let idx = basket
            .iter()
            .position(|e| e.product_id == product_id)
            .ok_or_else(|| {
                AppError::new(ErrorCode::BasketItemNotFound)
                    .with_detail("product_id", product_id.to_string())
            })?;
        basket.remove(idx);
        Ok(basket.clone())
    }

    /// Drop the caller's basket entirely. Clearing an absent basket is fine.
    pub fn clear(&self, caller: &str) {
        self.baskets.remove(caller);
    }

    pub fn list(&self, caller: &str) -> Vec<BasketEntry> {
        self.baskets
            .get(caller)
            .map(|b| b.clone())
            .unwrap_or_default()
    }
}
