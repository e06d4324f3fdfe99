//! Store Info API Module

mod handler;

use axum::{
    Router, middleware,
    routing::{get, put},
};

use crate::auth::require_admin;
use crate::core::ServerState;

/// Store info router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/store-info", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::get))
        .route(
            "/",
            put(handler::update).route_layer(middleware::from_fn(require_admin)),
        )
}
