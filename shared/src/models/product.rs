//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Generated id: `{name}#{sequence}`
    pub id: String,
    pub name: String,
    /// Generated description
    pub description: String,
    /// Price in minor currency units (e.g. cents)
    pub price: u64,
    /// Category reference (name, required)
    pub category: String,
    /// Blob reference for the product image
    pub image: String,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub price: u64,
    pub category: String,
    pub image: String,
}

/// Replace product image payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductImageReplace {
    pub image: String,
}
