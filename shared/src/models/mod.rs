//! Data models
//!
//! Shared between the server and frontend (via API).

pub mod admin;
pub mod basket;
pub mod batch;
pub mod blob_ref;
pub mod category;
pub mod payment;
pub mod price_floor;
pub mod product;
pub mod store_info;

// Re-exports
pub use admin::*;
pub use basket::*;
pub use batch::*;
pub use blob_ref::*;
pub use category::*;
pub use payment::*;
pub use price_floor::*;
pub use product::*;
pub use store_info::*;
