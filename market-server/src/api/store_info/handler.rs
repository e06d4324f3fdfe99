//! Store Info API Handlers

use axum::{
    Json,
    extract::{Extension, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::security_log;
use shared::AppResult;
use shared::models::{StoreInfo, StoreInfoUpdate};

/// Get current store info
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<StoreInfo>> {
    Ok(Json(state.store_info.read().clone()))
}

/// Update store info
pub async fn update(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<StoreInfoUpdate>,
) -> AppResult<Json<StoreInfo>> {
    let mut info = state.store_info.write();
    if let Some(name) = payload.name {
        info.name = name;
    }
    if let Some(address) = payload.address {
        info.address = address;
    }
    if payload.logo_url.is_some() {
        info.logo_url = payload.logo_url;
    }
    if payload.phone.is_some() {
        info.phone = payload.phone;
    }
    if payload.email.is_some() {
        info.email = payload.email;
    }
    if payload.website.is_some() {
        info.website = payload.website;
    }
    info.updated_at = Some(chrono::Utc::now().timestamp_millis());
    let updated = info.clone();
    drop(info);

    security_log!(
        "INFO",
        "store_info_updated",
        user_id = current_user.id.clone()
    );

    Ok(Json(updated))
}
