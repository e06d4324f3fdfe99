//! Payment API 模块
//!
//! 支付配置 (管理员) 与结账会话 (任何已认证用户)。

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    let admin = middleware::from_fn(require_admin);

    Router::new()
        .route("/api/payment/settings", get(handler::settings))
        .route(
            "/api/payment/settings",
            put(handler::configure).route_layer(admin),
        )
        .route("/api/checkout", post(handler::checkout))
        .route("/api/checkout/{session_id}", get(handler::session_status))
}
