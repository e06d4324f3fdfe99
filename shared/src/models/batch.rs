//! Batch Upload Models

use serde::{Deserialize, Serialize};

/// Pending product input accumulated during a batch upload session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInput {
    /// Generated id: `{name}#{product_count}`
    pub id: String,
    pub name: String,
    /// Price in minor currency units
    pub price: u64,
    /// Category reference (name)
    pub category: String,
    /// Blob reference for the product image
    pub image: String,
}

/// Start batch payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchStart {
    pub category: String,
}

/// Append item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchAppend {
    pub name: String,
    pub price: u64,
    pub image: String,
}

/// Snapshot of the batch session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchStatus {
    pub active: bool,
    /// Category the active session is bound to
    pub category: Option<String>,
    #[serde(default)]
    pub pending: Vec<ProductInput>,
}

/// Result of finishing a batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResult {
    /// Number of products committed to the catalog
    pub committed: usize,
}
