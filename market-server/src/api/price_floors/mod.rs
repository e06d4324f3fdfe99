//! Price Floor API 模块

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get, put},
};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/price-floors", routes())
}

fn routes() -> Router<ServerState> {
    let admin = middleware::from_fn(require_admin);

    Router::new()
        .route("/", get(handler::list))
        .route("/", put(handler::set).route_layer(admin.clone()))
        .route("/{category}", delete(handler::remove).route_layer(admin))
}
