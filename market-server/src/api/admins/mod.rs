//! Admin Registry API 模块
//!
//! 管理员授予/撤销，全部接口仅管理员可用。

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get},
};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/admins", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::grant))
        .route("/{principal}", delete(handler::revoke))
        .route_layer(middleware::from_fn(require_admin))
}
