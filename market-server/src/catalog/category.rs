//! Category Registry
//!
//! Two-level category tree. Each record stores only its `parent`; the
//! `subcategories` list exposed on reads is a view derived from the
//! children's `parent` fields, so there is no dual-write to keep in sync.
//!
//! Invariants:
//! - names are unique across the whole registry
//! - a category with a parent must reference an existing top-level category
//!   (nesting depth is capped at two levels)

use parking_lot::RwLock;
use shared::models::{Category, CategoryCreate, CategoryUpdate};
use shared::{AppError, AppResult, ErrorCode};

/// Stored form of a category. Order in the vector is registry order.
#[derive(Debug, Clone)]
struct CategoryRecord {
    name: String,
    parent: Option<String>,
}

#[derive(Debug, Default)]
pub struct CategoryRegistry {
    entries: RwLock<Vec<CategoryRecord>>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new category.
    ///
    /// Fails if the name is empty, already taken, or the declared parent is
    /// missing or itself a subcategory.
    pub fn add(&self, payload: CategoryCreate) -> AppResult<Category> {
        let mut entries = self.entries.write();

        if payload.name.is_empty() {
            return Err(AppError::new(ErrorCode::CategoryNameRequired));
        }
        if entries.iter().any(|e| e.name == payload.name) {
            return Err(AppError::new(ErrorCode::CategoryNameExists)
                .with_detail("name", payload.name.clone()));
        }
        validate_parent(&entries, payload.parent.as_deref())?;

        let record = CategoryRecord {
            name: payload.name,
            parent: payload.parent,
        };
        entries.push(record.clone());
        Ok(view(&entries, &record))
    }

    /// Update (and possibly rename) a category.
    ///
    /// A rename replaces the key entirely and re-points every child's
    /// `parent` to the new name, so no dangling parent references remain.
    pub fn update(&self, old_name: &str, payload: CategoryUpdate) -> AppResult<Category> {
        let mut entries = self.entries.write();

        let idx = entries
            .iter()
            .position(|e| e.name == old_name)
            .ok_or_else(|| category_not_found(old_name))?;

        let new_name = payload.name.unwrap_or_else(|| old_name.to_string());
        if new_name.is_empty() {
            return Err(AppError::new(ErrorCode::CategoryNameRequired));
        }
        if new_name != old_name && entries.iter().any(|e| e.name == new_name) {
            return Err(
                AppError::new(ErrorCode::CategoryNameExists).with_detail("name", new_name)
            );
        }

        // A category that has children must stay top-level.
        let has_children = entries
            .iter()
            .any(|e| e.parent.as_deref() == Some(old_name));
        if has_children && payload.parent.is_some() {
            return Err(AppError::new(ErrorCode::CategoryDepthExceeded)
                .with_detail("name", old_name.to_string()));
        }
        if payload.parent.as_deref() == Some(old_name) {
            return Err(AppError::validation("Category cannot be its own parent"));
        }
        validate_parent(&entries, payload.parent.as_deref())?;

        entries[idx].parent = payload.parent;
        if new_name != old_name {
            entries[idx].name = new_name.clone();
            // Re-point children at the renamed parent.
            for entry in entries.iter_mut() {
                if entry.parent.as_deref() == Some(old_name) {
                    entry.parent = Some(new_name.clone());
                }
            }
        }

        let updated = entries[idx].clone();
        Ok(view(&entries, &updated))
    }

    /// Delete a category by name.
    ///
    /// Deletion is refused while subcategories still reference the category;
    /// the product guard lives in the catalog service.
    pub fn delete(&self, name: &str) -> AppResult<()> {
        let mut entries = self.entries.write();

        let idx = entries
            .iter()
            .position(|e| e.name == name)
            .ok_or_else(|| category_not_found(name))?;

        if entries.iter().any(|e| e.parent.as_deref() == Some(name)) {
            return Err(AppError::new(ErrorCode::CategoryHasChildren)
                .with_detail("name", name.to_string()));
        }

        entries.remove(idx);
        Ok(())
    }

    /// Wholesale reorder of the registry.
    ///
    /// The caller supplies the full name list in the desired order and is
    /// trusted to have preserved the set; names outside the registry are
    /// rejected, names left out keep their relative order at the tail.
    pub fn reorder(&self, names: &[String]) -> AppResult<Vec<Category>> {
        let mut entries = self.entries.write();

        for name in names {
            if !entries.iter().any(|e| &e.name == name) {
                return Err(category_not_found(name));
            }
        }

        entries.sort_by_key(|e| {
            names
                .iter()
                .position(|n| n == &e.name)
                .unwrap_or(usize::MAX)
        });

        Ok(entries.iter().map(|e| view(&entries, e)).collect())
    }

    pub fn list(&self) -> Vec<Category> {
        let entries = self.entries.read();
        entries.iter().map(|e| view(&entries, e)).collect()
    }

    pub fn get(&self, name: &str) -> AppResult<Category> {
        let entries = self.entries.read();
        entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| view(&entries, e))
            .ok_or_else(|| category_not_found(name))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.entries.read().iter().any(|e| e.name == name)
    }
}

/// Parent must exist and must itself be top-level (depth cap).
fn validate_parent(entries: &[CategoryRecord], parent: Option<&str>) -> AppResult<()> {
    let Some(parent_name) = parent else {
        return Ok(());
    };

    let parent_record = entries
        .iter()
        .find(|e| e.name == parent_name)
        .ok_or_else(|| {
            AppError::new(ErrorCode::ParentCategoryNotFound)
                .with_detail("parent", parent_name.to_string())
        })?;

    if parent_record.parent.is_some() {
        return Err(AppError::new(ErrorCode::CategoryDepthExceeded)
            .with_detail("parent", parent_name.to_string()));
    }

    Ok(())
}

/// Build the read view with the derived subcategory list.
fn view(entries: &[CategoryRecord], record: &CategoryRecord) -> Category {
    Category {
        name: record.name.clone(),
        parent: record.parent.clone(),
        subcategories: entries
            .iter()
            .filter(|e| e.parent.as_deref() == Some(record.name.as_str()))
            .map(|e| e.name.clone())
            .collect(),
    }
}

fn category_not_found(name: &str) -> AppError {
    AppError::new(ErrorCode::CategoryNotFound).with_detail("name", name.to_string())
}
