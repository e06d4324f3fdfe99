//! Unified error codes for the Market edge server
//!
//! Error codes are shared between the server and frontend clients and are
//! organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Category errors
//! - 4xxx: Product errors
//! - 5xxx: Batch upload errors
//! - 6xxx: Basket errors
//! - 7xxx: Payment errors
//! - 8xxx: Storage/upload errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Token has expired
    TokenExpired = 1002,
    /// Token is invalid
    TokenInvalid = 1003,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Administrator role required
    AdminRequired = 2002,
    /// Cannot revoke the last administrator
    CannotRemoveLastAdmin = 2003,

    // ==================== 3xxx: Category ====================
    /// Category not found
    CategoryNotFound = 3001,
    /// Category name already exists
    CategoryNameExists = 3002,
    /// Category name is required
    CategoryNameRequired = 3003,
    /// Declared parent category not found
    ParentCategoryNotFound = 3004,
    /// Nesting deeper than two levels
    CategoryDepthExceeded = 3005,
    /// Category still has subcategories
    CategoryHasChildren = 3006,
    /// Category still has products
    CategoryHasProducts = 3007,

    // ==================== 4xxx: Product ====================
    /// Product not found
    ProductNotFound = 4001,
    /// Product name is required
    ProductNameRequired = 4002,
    /// Price is below the category floor
    PriceBelowFloor = 4003,
    /// Price floor not found
    PriceFloorNotFound = 4004,

    // ==================== 5xxx: Batch ====================
    /// A batch upload is already in progress
    BatchAlreadyActive = 5001,
    /// No batch upload in progress
    BatchNotActive = 5002,

    // ==================== 6xxx: Basket ====================
    /// Basket not found
    BasketNotFound = 6001,
    /// Basket entry not found
    BasketItemNotFound = 6002,
    /// Invalid quantity
    InvalidQuantity = 6003,

    // ==================== 7xxx: Payment ====================
    /// Payment processor not configured
    PaymentNotConfigured = 7001,
    /// Secret key is required
    SecretKeyRequired = 7002,
    /// Malformed country code
    InvalidCountryCode = 7003,
    /// Payment session creation failed
    PaymentSessionFailed = 7004,
    /// Payment session not found
    PaymentSessionNotFound = 7005,

    // ==================== 8xxx: Storage ====================
    /// File too large
    FileTooLarge = 8001,
    /// Unsupported file format
    UnsupportedFileFormat = 8002,
    /// Invalid/corrupted image file
    InvalidImageFile = 8003,
    /// No file provided in request
    NoFileProvided = 8004,
    /// Empty file provided
    EmptyFile = 8005,
    /// File storage failed
    FileStorageFailed = 8006,
    /// Blob reference not found
    BlobNotFound = 8007,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Network error
    NetworkError = 9002,
    /// Operation timeout
    TimeoutError = 9003,
    /// Configuration error
    ConfigError = 9004,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::AdminRequired => "Administrator role is required",
            ErrorCode::CannotRemoveLastAdmin => "Cannot revoke the last administrator",

            // Category
            ErrorCode::CategoryNotFound => "Category not found",
            ErrorCode::CategoryNameExists => "Category name already exists",
            ErrorCode::CategoryNameRequired => "Category name is required",
            ErrorCode::ParentCategoryNotFound => "Parent category not found",
            ErrorCode::CategoryDepthExceeded => "Categories cannot nest deeper than two levels",
            ErrorCode::CategoryHasChildren => "Category still has subcategories",
            ErrorCode::CategoryHasProducts => "Category still has associated products",

            // Product
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::ProductNameRequired => "Product name is required",
            ErrorCode::PriceBelowFloor => "Price is below the category minimum",
            ErrorCode::PriceFloorNotFound => "Price floor not found",

            // Batch
            ErrorCode::BatchAlreadyActive => "A batch upload is already in progress",
            ErrorCode::BatchNotActive => "No batch upload is in progress",

            // Basket
            ErrorCode::BasketNotFound => "Basket not found",
            ErrorCode::BasketItemNotFound => "Basket entry not found",
            ErrorCode::InvalidQuantity => "Invalid quantity",

            // Payment
            ErrorCode::PaymentNotConfigured => "Payment processor is not configured",
            ErrorCode::SecretKeyRequired => "Payment secret key is required",
            ErrorCode::InvalidCountryCode => "Country code must be two uppercase letters",
            ErrorCode::PaymentSessionFailed => "Payment session creation failed",
            ErrorCode::PaymentSessionNotFound => "Payment session not found",

            // Storage
            ErrorCode::FileTooLarge => "File too large",
            ErrorCode::UnsupportedFileFormat => "Unsupported file format",
            ErrorCode::InvalidImageFile => "Invalid image file",
            ErrorCode::NoFileProvided => "No file provided",
            ErrorCode::EmptyFile => "Empty file provided",
            ErrorCode::FileStorageFailed => "File storage failed",
            ErrorCode::BlobNotFound => "Blob reference not found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::TokenExpired),
            1003 => Ok(ErrorCode::TokenInvalid),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::AdminRequired),
            2003 => Ok(ErrorCode::CannotRemoveLastAdmin),

            // Category
            3001 => Ok(ErrorCode::CategoryNotFound),
            3002 => Ok(ErrorCode::CategoryNameExists),
            3003 => Ok(ErrorCode::CategoryNameRequired),
            3004 => Ok(ErrorCode::ParentCategoryNotFound),
            3005 => Ok(ErrorCode::CategoryDepthExceeded),
            3006 => Ok(ErrorCode::CategoryHasChildren),
            3007 => Ok(ErrorCode::CategoryHasProducts),

            // Product
            4001 => Ok(ErrorCode::ProductNotFound),
            4002 => Ok(ErrorCode::ProductNameRequired),
            4003 => Ok(ErrorCode::PriceBelowFloor),
            4004 => Ok(ErrorCode::PriceFloorNotFound),

            // Batch
            5001 => Ok(ErrorCode::BatchAlreadyActive),
            5002 => Ok(ErrorCode::BatchNotActive),

            // Basket
            6001 => Ok(ErrorCode::BasketNotFound),
            6002 => Ok(ErrorCode::BasketItemNotFound),
            6003 => Ok(ErrorCode::InvalidQuantity),

            // Payment
            7001 => Ok(ErrorCode::PaymentNotConfigured),
            7002 => Ok(ErrorCode::SecretKeyRequired),
            7003 => Ok(ErrorCode::InvalidCountryCode),
            7004 => Ok(ErrorCode::PaymentSessionFailed),
            7005 => Ok(ErrorCode::PaymentSessionNotFound),

            // Storage
            8001 => Ok(ErrorCode::FileTooLarge),
            8002 => Ok(ErrorCode::UnsupportedFileFormat),
            8003 => Ok(ErrorCode::InvalidImageFile),
            8004 => Ok(ErrorCode::NoFileProvided),
            8005 => Ok(ErrorCode::EmptyFile),
            8006 => Ok(ErrorCode::FileStorageFailed),
            8007 => Ok(ErrorCode::BlobNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::NetworkError),
            9003 => Ok(ErrorCode::TimeoutError),
            9004 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
