//! Batch Upload API 模块
//!
//! 全局单例批量上传会话：start → append → finish。

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/batch", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::status))
        .route("/start", post(handler::start))
        .route("/items", post(handler::append))
        .route("/finish", post(handler::finish))
        .route_layer(middleware::from_fn(require_admin))
}
