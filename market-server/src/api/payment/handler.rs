//! Payment API Handlers

use axum::{
    Json,
    extract::{Extension, Path, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use shared::models::{
    CheckoutRequest, CheckoutSession, PaymentSettings, PaymentSettingsView, SessionItem,
    SessionStatus,
};
use shared::{AppError, AppResult};

/// GET /api/payment/settings - 查看支付配置 (脱敏视图)
pub async fn settings(State(state): State<ServerState>) -> Json<PaymentSettingsView> {
    Json(state.payment_config.view())
}

/// PUT /api/payment/settings - 设置支付配置
pub async fn configure(
    State(state): State<ServerState>,
    Json(payload): Json<PaymentSettings>,
) -> AppResult<Json<PaymentSettingsView>> {
    let view = state.payment_config.configure(payload)?;
    Ok(Json(view))
}

/// POST /api/checkout - 用当前购物篮创建支付会话
pub async fn checkout(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<CheckoutRequest>,
) -> AppResult<Json<CheckoutSession>> {
    let secret_key = state.payment_config.secret_key()?;

    let basket = state.baskets.list(&current_user.id);
    if basket.is_empty() {
        return Err(AppError::validation("Basket is empty"));
    }

    // 把购物篮条目解析成支付行项目; 商品被删除时结账失败
    let mut items = Vec::with_capacity(basket.len());
    for entry in &basket {
        let product = state.catalog.get_product(&entry.product_id)?;
        items.push(SessionItem {
            name: product.name,
            price: product.price,
            quantity: entry.quantity,
        });
    }

    let session = state
        .payment
        .create_session(&secret_key, &items, &payload.success_url, &payload.cancel_url)
        .await?;
    Ok(Json(session))
}

/// GET /api/checkout/:session_id - 查询支付会话终态
pub async fn session_status(
    State(state): State<ServerState>,
    Path(session_id): Path<String>,
) -> AppResult<Json<SessionStatus>> {
    let secret_key = state.payment_config.secret_key()?;
    let status = state.payment.session_status(&secret_key, &session_id).await?;
    Ok(Json(status))
}
