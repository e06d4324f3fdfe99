//! Product API 模块

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/products", routes())
}

fn routes() -> Router<ServerState> {
    let admin = middleware::from_fn(require_admin);

    Router::new()
        .route("/", get(handler::list))
        .route("/", post(handler::create).route_layer(admin.clone()))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}", axum::routing::delete(handler::delete).route_layer(admin.clone()))
        .route("/{id}/image", put(handler::replace_image).route_layer(admin))
}
