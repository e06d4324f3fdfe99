//! Blob 直链读取模块
//!
//! `/blobs/{id}` 不在 `/api/` 下，跳过认证，客户端用它渲染商品图片。

use axum::{
    Router,
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    routing::get,
};

use crate::core::ServerState;
use shared::AppResult;

pub fn router() -> Router<ServerState> {
    Router::new().route("/blobs/{id}", get(serve))
}

/// GET /blobs/:id - 读取 blob 内容
pub async fn serve(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let data = state.blobs.open(&id).await?;

    // The local store keeps everything as JPEG
    let mime = mime_guess::from_path(format!("{}.jpg", id)).first_or_octet_stream();

    Ok((
        [
            (header::CONTENT_TYPE, mime.to_string()),
            (header::CACHE_CONTROL, "public, max-age=31536000, immutable".to_string()),
        ],
        data,
    ))
}
