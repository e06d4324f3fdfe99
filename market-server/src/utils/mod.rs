//! 工具模块 - 通用工具函数
//!
//! - [`logger`] - 日志初始化
//! - 错误类型统一从 `shared::error` re-export

pub mod logger;

pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
