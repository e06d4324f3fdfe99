//! Category API 模块

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/categories", routes())
}

fn routes() -> Router<ServerState> {
    let admin = middleware::from_fn(require_admin);

    Router::new()
        .route("/", get(handler::list))
        .route("/", post(handler::create).route_layer(admin.clone()))
        // Wholesale reorder (must be before /{name} to avoid path conflicts)
        .route("/reorder", put(handler::reorder).route_layer(admin.clone()))
        .route("/{name}", get(handler::get_by_name))
        .route(
            "/{name}",
            put(handler::update)
                .delete(handler::delete)
                .route_layer(admin),
        )
}
