//! Unified error handling
//!
//! - [`ErrorCode`] - numeric error codes shared with clients
//! - [`ErrorCategory`] - range-based classification
//! - [`AppError`] - application error carrying code, message and details
//! - [`ApiResponse`] - unified response envelope

pub mod category;
pub mod codes;
pub mod http;
pub mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
