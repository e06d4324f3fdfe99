//! Price Floor API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use shared::AppResult;
use shared::models::PriceFloor;

/// GET /api/price-floors - 获取所有价格下限
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<PriceFloor>>> {
    Ok(Json(state.catalog.list_price_floors()))
}

/// PUT /api/price-floors - 设置 (或替换) 分类价格下限
pub async fn set(
    State(state): State<ServerState>,
    Json(payload): Json<PriceFloor>,
) -> AppResult<Json<PriceFloor>> {
    let floor = state.catalog.set_price_floor(payload)?;
    Ok(Json(floor))
}

/// DELETE /api/price-floors/:category - 移除分类价格下限
pub async fn remove(
    State(state): State<ServerState>,
    Path(category): Path<String>,
) -> AppResult<Json<bool>> {
    state.catalog.remove_price_floor(&category)?;
    Ok(Json(true))
}
