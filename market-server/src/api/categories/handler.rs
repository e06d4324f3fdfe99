//! Category API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use shared::AppResult;
use shared::models::{Category, CategoryCreate, CategoryReorder, CategoryUpdate};

/// GET /api/categories - 获取所有分类
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Category>>> {
    Ok(Json(state.catalog.list_categories()))
}

/// GET /api/categories/:name - 获取单个分类
pub async fn get_by_name(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> AppResult<Json<Category>> {
    let category = state.catalog.get_category(&name)?;
    Ok(Json(category))
}

/// POST /api/categories - 创建分类
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<Json<Category>> {
    let category = state.catalog.create_category(payload)?;
    Ok(Json(category))
}

/// PUT /api/categories/:name - 更新分类 (重命名时级联修正引用)
pub async fn update(
    State(state): State<ServerState>,
    Path(name): Path<String>,
    Json(payload): Json<CategoryUpdate>,
) -> AppResult<Json<Category>> {
    let category = state.catalog.update_category(&name, payload)?;
    Ok(Json(category))
}

/// DELETE /api/categories/:name - 删除分类 (有子分类或商品时拒绝)
pub async fn delete(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> AppResult<Json<bool>> {
    state.catalog.delete_category(&name)?;
    Ok(Json(true))
}

/// PUT /api/categories/reorder - 整体重排分类顺序
pub async fn reorder(
    State(state): State<ServerState>,
    Json(payload): Json<CategoryReorder>,
) -> AppResult<Json<Vec<Category>>> {
    let categories = state.catalog.reorder_categories(&payload.names)?;
    Ok(Json(categories))
}
