//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`categories`] - 分类注册表接口
//! - [`products`] - 商品目录接口
//! - [`batch`] - 批量上传会话接口
//! - [`price_floors`] - 价格下限接口
//! - [`basket`] - 购物篮接口
//! - [`payment`] - 支付配置和结账接口
//! - [`store_info`] - 店铺信息接口
//! - [`admins`] - 管理员注册表接口
//! - [`upload`] - 图片上传接口
//! - [`blobs`] - Blob 直链读取接口

pub mod admins;
pub mod basket;
pub mod batch;
pub mod blobs;
pub mod categories;
pub mod health;
pub mod payment;
pub mod price_floors;
pub mod products;
pub mod store_info;
pub mod upload;

use axum::Router;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::auth::require_auth;
use crate::core::ServerState;

// Re-export common types for handlers
pub use shared::{ApiResponse, AppResult};

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Catalog APIs - public reads, admin mutations
        .merge(categories::router())
        .merge(products::router())
        .merge(price_floors::router())
        // Batch upload - admin only
        .merge(batch::router())
        // Basket API - authentication required
        .merge(basket::router())
        // Payment configuration and checkout
        .merge(payment::router())
        // Store info - public read, admin update
        .merge(store_info::router())
        // Admin registry - admin only
        .merge(admins::router())
        // Image upload - admin only
        .merge(upload::router())
        // Blob direct links - public route
        .merge(blobs::router())
        // Health API - public route
        .merge(health::router())
}

/// Build a fully configured application with all middleware and state
pub fn build_app(state: ServerState) -> Router {
    build_router()
        // ========== Tower HTTP Middleware ==========
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Request ID - Generate unique ID for each request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        // JWT authentication - executes before routes, injects CurrentUser
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ))
        .with_state(state)
}
