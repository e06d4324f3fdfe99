//! Basket API Handlers

use axum::{
    Json,
    extract::{Extension, Path, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use shared::models::{BasketAdd, BasketEntry};
use shared::{AppError, AppResult, ErrorCode};

/// GET /api/basket - 获取当前调用者的购物篮
pub async fn list(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<BasketEntry>>> {
    Ok(Json(state.baskets.list(&current_user.id)))
}

/// POST /api/basket/items - 设置商品数量 (覆盖而非累加)
pub async fn add(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<BasketAdd>,
) -> AppResult<Json<Vec<BasketEntry>>> {
    if !state.catalog.product_exists(&payload.product_id) {
        return Err(AppError::new(ErrorCode::ProductNotFound)
            .with_detail("id", payload.product_id));
    }
    let basket = state
        .baskets
        .add(&current_user.id, payload.product_id, payload.quantity)?;
    Ok(Json(basket))
}

/// DELETE /api/basket/items/:product_id - 从购物篮移除商品
pub async fn remove(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(product_id): Path<String>,
) -> AppResult<Json<Vec<BasketEntry>>> {
    let basket = state.baskets.remove(&current_user.id, &product_id)?;
    Ok(Json(basket))
}

/// DELETE /api/basket - 清空购物篮 (整体移除)
pub async fn clear(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<bool>> {
    state.baskets.clear(&current_user.id);
    Ok(Json(true))
}
