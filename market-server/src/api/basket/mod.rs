//! Basket API 模块
//!
//! 购物篮按调用者身份隔离，任何已认证用户可用。

mod handler;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/basket", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).delete(handler::clear))
        .route("/items", post(handler::add))
        .route("/items/{product_id}", delete(handler::remove))
}
