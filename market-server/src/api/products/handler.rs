//! Product API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use shared::AppResult;
use shared::models::{Product, ProductCreate, ProductImageReplace};

/// GET /api/products - 获取所有商品 (对所有调用者可见)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    Ok(Json(state.catalog.list_products()))
}

/// GET /api/products/:id - 获取单个商品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let product = state.catalog.get_product(&id)?;
    Ok(Json(product))
}

/// POST /api/products - 创建商品 (校验分类存在和价格下限)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<Json<Product>> {
    let product = state.catalog.create_product(payload)?;
    Ok(Json(product))
}

/// DELETE /api/products/:id - 删除商品
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    state.catalog.delete_product(&id)?;
    Ok(Json(true))
}

/// PUT /api/products/:id/image - 替换商品图片 (其余字段保持不变)
pub async fn replace_image(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductImageReplace>,
) -> AppResult<Json<Product>> {
    let product = state.catalog.replace_product_image(&id, payload.image)?;
    Ok(Json(product))
}
