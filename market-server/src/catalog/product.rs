//! Product Catalog
//!
//! Append-ordered product list. Identifiers are minted as
//! `{name}#{suffix}` from a counter that only ever grows, so an id is
//! never handed out twice even across deletions or same-name products.

use parking_lot::RwLock;
use shared::models::Product;
use shared::{AppError, AppResult, ErrorCode};

#[derive(Debug, Default)]
struct Inner {
    entries: Vec<Product>,
    next_suffix: u64,
}

#[derive(Debug, Default)]
pub struct ProductCatalog {
    inner: RwLock<Inner>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a product, minting its id from the suffix counter.
    pub fn insert(
        &self,
        name: String,
        description: String,
        price: u64,
        category: String,
        image: String,
    ) -> AppResult<Product> {
        if name.is_empty() {
            return Err(AppError::new(ErrorCode::ProductNameRequired));
        }

        let mut inner = self.inner.write();
        let suffix = inner.next_suffix;
        inner.next_suffix += 1;
        let product = Product {
            id: format!("{}#{}", name, suffix),
            name,
            description,
            price,
            category,
            image,
        };
        inner.entries.push(product.clone());
        Ok(product)
    }

    /// Mint an id without inserting anything. The suffix is consumed even
    /// if the caller never commits, so a staged id can never collide with
    /// a later insert.
    pub fn mint_id(&self, name: &str) -> String {
        let mut inner = self.inner.write();
        let suffix = inner.next_suffix;
        inner.next_suffix += 1;
        format!("{}#{}", name, suffix)
    }

    /// Insert pre-built products in one locked pass, keeping the ids
    /// minted when they were staged.
    pub fn insert_all(&self, products: Vec<Product>) -> usize {
        let mut inner = self.inner.write();
        let count = products.len();
        inner.entries.extend(products);
        count
    }

    pub fn list(&self) -> Vec<Product> {
        self.inner.read().entries.clone()
    }

    pub fn get(&self, id: &str) -> AppResult<Product> {
        self.inner
            .read()
            .entries
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| product_not_found(id))
    }

    pub fn delete(&self, id: &str) -> AppResult<()> {
        let mut inner = self.inner.write();
        let idx = inner
            .entries
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| product_not_found(id))?;
        inner.entries.remove(idx);
        Ok(())
    }

    /// Swap a product's image reference, returning the updated product.
    pub fn replace_image(&self, id: &str, image: String) -> AppResult<Product> {
        let mut inner = self.inner.write();
        let product = inner
            .entries
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| product_not_found(id))?;
        product.image = image;
        Ok(product.clone())
    }

    pub fn any_in_category(&self, category: &str) -> bool {
        self.inner.read().entries.iter().any(|p| p.category == category)
    }

    /// Follow a category rename: move every product in `old` to `new`.
    pub fn repoint_category(&self, old: &str, new: &str) {
        let mut inner = self.inner.write();
        for product in inner.entries.iter_mut() {
            if product.category == old {
                product.category = new.to_string();
            }
        }
    }
}

fn product_not_found(id: &str) -> AppError {
    AppError::new(ErrorCode::ProductNotFound).with_detail("id", id.to_string())
}
