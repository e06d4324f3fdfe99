//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity
///
/// The registry stores only `parent`; `subcategories` is a view derived from
/// the children's `parent` fields when the category is read. Depth is capped
/// at two levels: a category with a parent can never itself be a parent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique name, the registry key
    pub name: String,
    /// Parent category name (absent for top-level categories)
    pub parent: Option<String>,
    /// Names of direct subcategories, in registry order
    #[serde(default)]
    pub subcategories: Vec<String>,
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
    pub parent: Option<String>,
}

/// Update category payload
///
/// `name` renames the category (the key changes); `parent` re-parents it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub parent: Option<String>,
}

/// Wholesale reorder payload: the full registry in the desired order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryReorder {
    pub names: Vec<String>,
}
