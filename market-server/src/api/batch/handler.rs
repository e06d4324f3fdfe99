//! Batch Upload API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use shared::AppResult;
use shared::models::{BatchAppend, BatchResult, BatchStart, BatchStatus};

/// GET /api/batch - 查看当前会话状态
pub async fn status(State(state): State<ServerState>) -> Json<BatchStatus> {
    Json(state.catalog.batch_status())
}

/// POST /api/batch/start - 开启批量上传会话
pub async fn start(
    State(state): State<ServerState>,
    Json(payload): Json<BatchStart>,
) -> AppResult<Json<BatchStatus>> {
    let status = state.catalog.start_batch(payload.category)?;
    Ok(Json(status))
}

/// POST /api/batch/items - 向会话追加待上架商品
pub async fn append(
    State(state): State<ServerState>,
    Json(payload): Json<BatchAppend>,
) -> AppResult<Json<BatchStatus>> {
    let status = state.catalog.append_batch_item(payload)?;
    Ok(Json(status))
}

/// POST /api/batch/finish - 提交会话内全部商品 (全部成功或全部不提交)
pub async fn finish(State(state): State<ServerState>) -> AppResult<Json<BatchResult>> {
    let committed = state.catalog.finish_batch()?;
    Ok(Json(BatchResult { committed }))
}
