//! Price Floor Table
//!
//! Per-category minimum prices. Floors are stored as decimal major units
//! while product prices travel as integer minor units, so the comparison
//! converts the product price with a fixed scale of two.

use parking_lot::RwLock;
use rust_decimal::Decimal;
use shared::models::PriceFloor;
use shared::{AppError, AppResult, ErrorCode};

#[derive(Debug, Default)]
pub struct PriceFloorTable {
    entries: RwLock<Vec<PriceFloor>>,
}

impl PriceFloorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or replace) the floor for a category.
    pub fn set(&self, floor: PriceFloor) -> PriceFloor {
        let mut entries = self.entries.write();
        if let Some(existing) = entries.iter_mut().find(|f| f.category == floor.category) {
            existing.min_price = floor.min_price;
            existing.clone()
        } else {
            entries.push(floor.clone());
            floor
        }
    }

    pub fn remove(&self, category: &str) -> AppResult<()> {
        let mut entries = self.entries.write();
        let idx = entries
            .iter()
            .position(|f| f.category == category)
            .ok_or_else(|| {
                AppError::new(ErrorCode::PriceFloorNotFound)
                    .with_detail("category", category.to_string())
            })?;
        entries.remove(idx);
        Ok(())
    }

    pub fn list(&self) -> Vec<PriceFloor> {
        self.entries.read().clone()
    }

    pub fn get(&self, category: &str) -> Option<PriceFloor> {
        self.entries
            .read()
            .iter()
            .find(|f| f.category == category)
            .cloned()
    }

    /// Reject a price below the category's floor. Categories without a
    /// floor accept any price.
    pub fn check(&self, category: &str, price: u64) -> AppResult<()> {
        let Some(floor) = self.get(category) else {
            return Ok(());
        };

        // Decimal holds any u64 exactly, so no lossy i64 cast.
        let offered = Decimal::from(price) / Decimal::ONE_HUNDRED;
        if offered < floor.min_price {
            return Err(AppError::new(ErrorCode::PriceBelowFloor)
                .with_detail("category", category.to_string())
                .with_detail("min_price", floor.min_price.to_string())
                .with_detail("offered", offered.to_string()));
        }
        Ok(())
    }

    /// Follow a category rename.
    pub fn repoint_category(&self, old: &str, new: &str) {
        let mut entries = self.entries.write();
        for floor in entries.iter_mut() {
            if floor.category == old {
                floor.category = new.to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor(category: &str, min_price: Decimal) -> PriceFloor {
        PriceFloor {
            category: category.to_string(),
            min_price,
        }
    }

    #[test]
    fn test_check_without_floor_passes() {
        let table = PriceFloorTable::new();
        assert!(table.check("tools", 1).is_ok());
    }

    #[test]
    fn test_check_against_floor() {
        let table = PriceFloorTable::new();
        table.set(floor("tools", Decimal::new(500, 2)));

        // 500 minor units is exactly 5.00.
        assert!(table.check("tools", 500).is_ok());
        assert!(table.check("tools", 501).is_ok());

        let err = table.check("tools", 499).unwrap_err();
        assert_eq!(err.code, ErrorCode::PriceBelowFloor);
    }

    #[test]
    fn test_check_huge_price_passes() {
        let table = PriceFloorTable::new();
        table.set(floor("tools", Decimal::new(500, 2)));

        // Prices past i64::MAX must not wrap negative and fail the check.
        assert!(table.check("tools", u64::MAX).is_ok());
        assert!(table.check("tools", i64::MAX as u64 + 1).is_ok());
    }

    #[test]
    fn test_set_replaces() {
        let table = PriceFloorTable::new();
        table.set(floor("tools", Decimal::new(500, 2)));
        table.set(floor("tools", Decimal::new(750, 2)));

        assert_eq!(table.list().len(), 1);
        assert_eq!(table.get("tools").unwrap().min_price, Decimal::new(750, 2));
    }

    #[test]
    fn test_remove_missing() {
        let table = PriceFloorTable::new();
        let err = table.remove("tools").unwrap_err();
        assert_eq!(err.code, ErrorCode::PriceFloorNotFound);
    }

    #[test]
    fn test_repoint_category() {
        let table = PriceFloorTable::new();
        table.set(floor("tools", Decimal::new(500, 2)));
        table.repoint_category("tools", "hardware");

        assert!(table.get("tools").is_none());
        assert_eq!(table.get("hardware").unwrap().min_price, Decimal::new(500, 2));
    }
}
