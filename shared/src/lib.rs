//! Shared types for the Market edge server
//!
//! Common types used by the server and its clients: data models,
//! unified error codes, and the API response envelope.

pub mod error;
pub mod models;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
