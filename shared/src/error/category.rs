//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Authentication errors
/// - 2xxx: Permission errors
/// - 3xxx: Category errors
/// - 4xxx: Product errors
/// - 5xxx: Batch upload errors
/// - 6xxx: Basket errors
/// - 7xxx: Payment errors
/// - 8xxx: Storage errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// Category errors (3xxx)
    Category,
    /// Product errors (4xxx)
    Product,
    /// Batch upload errors (5xxx)
    Batch,
    /// Basket errors (6xxx)
    Basket,
    /// Payment errors (7xxx)
    Payment,
    /// Storage errors (8xxx)
    Storage,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            3000..4000 => Self::Category,
            4000..5000 => Self::Product,
            5000..6000 => Self::Batch,
            6000..7000 => Self::Basket,
            7000..8000 => Self::Payment,
            8000..9000 => Self::Storage,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Permission => "permission",
            Self::Category => "category",
            Self::Product => "product",
            Self::Batch => "batch",
            Self::Basket => "basket",
            Self::Payment => "payment",
            Self::Storage => "storage",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Auth);
        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Permission);
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Category);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Product);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::Batch);
        assert_eq!(ErrorCategory::from_code(6001), ErrorCategory::Basket);
        assert_eq!(ErrorCategory::from_code(7001), ErrorCategory::Payment);
        assert_eq!(ErrorCategory::from_code(8001), ErrorCategory::Storage);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::NotAuthenticated.category(), ErrorCategory::Auth);
        assert_eq!(
            ErrorCode::AdminRequired.category(),
            ErrorCategory::Permission
        );
        assert_eq!(
            ErrorCode::CategoryNotFound.category(),
            ErrorCategory::Category
        );
        assert_eq!(ErrorCode::ProductNotFound.category(), ErrorCategory::Product);
        assert_eq!(ErrorCode::BatchNotActive.category(), ErrorCategory::Batch);
        assert_eq!(ErrorCode::BasketNotFound.category(), ErrorCategory::Basket);
        assert_eq!(
            ErrorCode::PaymentSessionFailed.category(),
            ErrorCategory::Payment
        );
        assert_eq!(ErrorCode::FileTooLarge.category(), ErrorCategory::Storage);
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_name() {
        assert_eq!(ErrorCategory::General.name(), "general");
        assert_eq!(ErrorCategory::Batch.name(), "batch");
        assert_eq!(ErrorCategory::Basket.name(), "basket");
        assert_eq!(ErrorCategory::System.name(), "system");
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&ErrorCategory::Payment).unwrap();
        assert_eq!(json, "\"payment\"");

        let category: ErrorCategory = serde_json::from_str("\"batch\"").unwrap();
        assert_eq!(category, ErrorCategory::Batch);
    }
}
