//! Catalog Domain
//!
//! Categories, products, price floors and the batch upload session, plus
//! the cross-entity rules that tie them together. The individual stores
//! know nothing about each other; [`CatalogService`] is where a category
//! rename reaches products and floors, where deletion guards live, and
//! where batch commits resolve categories and enforce floors.

pub mod batch;
pub mod category;
pub mod price_floor;
pub mod product;

pub use batch::BatchSession;
pub use category::CategoryRegistry;
pub use price_floor::PriceFloorTable;
pub use product::ProductCatalog;

use shared::models::{
    BatchAppend, BatchStatus, Category, CategoryCreate, CategoryUpdate, PriceFloor, Product,
    ProductCreate, ProductInput,
};
use shared::{AppError, AppResult, ErrorCode};

#[derive(Debug, Default)]
pub struct CatalogService {
    categories: CategoryRegistry,
    products: ProductCatalog,
    floors: PriceFloorTable,
    batch: BatchSession,
}

impl CatalogService {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Categories ====================

    pub fn list_categories(&self) -> Vec<Category> {
        self.categories.list()
    }

    pub fn get_category(&self, name: &str) -> AppResult<Category> {
        self.categories.get(name)
    }

    pub fn create_category(&self, payload: CategoryCreate) -> AppResult<Category> {
        let category = self.categories.add(payload)?;
        tracing::info!(name = %category.name, "Category created");
        Ok(category)
    }

    /// Update a category. On rename, products and price floors that
    /// reference the old name follow to the new one.
    pub fn update_category(&self, name: &str, payload: CategoryUpdate) -> AppResult<Category> {
        let renamed_to = payload
            .name
            .as_deref()
            .filter(|new_name| *new_name != name)
            .map(str::to_string);

        let category = self.categories.update(name, payload)?;

        if let Some(new_name) = renamed_to {
            self.products.repoint_category(name, &new_name);
            self.floors.repoint_category(name, &new_name);
            tracing::info!(from = %name, to = %new_name, "Category renamed");
        }
        Ok(category)
    }

    /// Delete a category. Refused while subcategories or products still
    /// reference it, so nothing is left dangling.
    pub fn delete_category(&self, name: &str) -> AppResult<()> {
        if !self.categories.exists(name) {
            return Err(
                AppError::new(ErrorCode::CategoryNotFound).with_detail("name", name.to_string())
            );
        }
        if self.products.any_in_category(name) {
            return Err(AppError::new(ErrorCode::CategoryHasProducts)
                .with_detail("name", name.to_string()));
        }

        self.categories.delete(name)?;
        // A floor without its category is meaningless.
        let _ = self.floors.remove(name);
        tracing::info!(name = %name, "Category deleted");
        Ok(())
    }

    pub fn reorder_categories(&self, names: &[String]) -> AppResult<Vec<Category>> {
        self.categories.reorder(names)
    }

    // ==================== Products ====================

    pub fn list_products(&self) -> Vec<Product> {
        self.products.list()
    }

    pub fn get_product(&self, id: &str) -> AppResult<Product> {
        self.products.get(id)
    }

    /// Create a product. The category must exist and the price must clear
    /// the category's floor, if one is set.
    pub fn create_product(&self, payload: ProductCreate) -> AppResult<Product> {
        if !self.categories.exists(&payload.category) {
            return Err(AppError::new(ErrorCode::CategoryNotFound)
                .with_detail("name", payload.category.clone()));
        }
        self.floors.check(&payload.category, payload.price)?;

        let description = describe(&payload.name, &payload.category);
        let product = self.products.insert(
            payload.name,
            description,
            payload.price,
            payload.category,
            payload.image,
        )?;
        tracing::info!(id = %product.id, "Product created");
        Ok(product)
    }

    pub fn delete_product(&self, id: &str) -> AppResult<()> {
        self.products.delete(id)?;
        tracing::info!(id = %id, "Product deleted");
        Ok(())
    }

    pub fn replace_product_image(&self, id: &str, image: String) -> AppResult<Product> {
        self.products.replace_image(id, image)
    }

    pub fn product_exists(&self, id: &str) -> bool {
        self.products.get(id).is_ok()
    }

    // ==================== Price floors ====================

    pub fn list_price_floors(&self) -> Vec<PriceFloor> {
        self.floors.list()
    }

    pub fn set_price_floor(&self, floor: PriceFloor) -> AppResult<PriceFloor> {
        if !self.categories.exists(&floor.category) {
            return Err(AppError::new(ErrorCode::CategoryNotFound)
                .with_detail("name", floor.category.clone()));
        }
        Ok(self.floors.set(floor))
    }

    pub fn remove_price_floor(&self, category: &str) -> AppResult<()> {
        self.floors.remove(category)
    }

    // ==================== Batch upload ====================

    pub fn start_batch(&self, category: String) -> AppResult<BatchStatus> {
        if !self.categories.exists(&category) {
            return Err(
                AppError::new(ErrorCode::CategoryNotFound).with_detail("name", category)
            );
        }
        self.batch.start(category)
    }

    /// Stage an item into the open batch. The item's price is checked
    /// against the session category's floor up front, so a bad item is
    /// rejected at append time instead of poisoning the final commit.
    /// Floor check and id minting happen inside the session lock, against
    /// the session the item actually lands in.
    pub fn append_batch_item(&self, payload: BatchAppend) -> AppResult<BatchStatus> {
        if payload.name.is_empty() {
            return Err(AppError::new(ErrorCode::ProductNameRequired));
        }
        self.batch.append(|category| {
            self.floors.check(category, payload.price)?;
            Ok(ProductInput {
                id: self.products.mint_id(&payload.name),
                name: payload.name.clone(),
                price: payload.price,
                category: category.to_string(),
                image: payload.image.clone(),
            })
        })
    }

    pub fn batch_status(&self) -> BatchStatus {
        self.batch.status()
    }

    /// Commit the open batch into the catalog. All items land or none do:
    /// the session's category is resolved once before any insert, and a
    /// failure leaves the session active with its items intact.
    pub fn finish_batch(&self) -> AppResult<usize> {
        let committed = self.batch.finish(|category, pending| {
            if !self.categories.exists(category) {
                return Err(AppError::new(ErrorCode::CategoryNotFound)
                    .with_detail("name", category.to_string()));
            }
            for item in pending {
                self.floors.check(category, item.price)?;
            }

            let products = pending
                .iter()
                .map(|item| Product {
                    id: item.id.clone(),
                    name: item.name.clone(),
                    description: describe(&item.name, category),
                    price: item.price,
                    category: category.to_string(),
                    image: item.image.clone(),
                })
                .collect();
            Ok(self.products.insert_all(products))
        })?;

        if committed > 0 {
            tracing::info!(committed, "Batch committed");
        }
        Ok(committed)
    }
}

/// Generated product description.
fn describe(name: &str, category: &str) -> String {
    format!("{} ({})", name, category)
}
