//! Image Upload API 模块

mod handler;

use axum::{Router, middleware, routing::post};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/upload", post(handler::upload))
        .route_layer(middleware::from_fn(require_admin))
}
