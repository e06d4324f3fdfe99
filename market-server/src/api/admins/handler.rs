//! Admin Registry API Handlers

use axum::{
    Json,
    extract::{Extension, Path, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::security_log;
use shared::AppResult;
use shared::models::AdminGrant;

/// GET /api/admins - 列出所有管理员 principal
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<String>>> {
    Ok(Json(state.admins.list()))
}

/// POST /api/admins - 授予管理员权限
pub async fn grant(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<AdminGrant>,
) -> AppResult<Json<Vec<String>>> {
    state.admins.grant(&payload.principal)?;

    security_log!(
        "INFO",
        "admin_granted",
        principal = payload.principal,
        granted_by = current_user.id.clone()
    );

    Ok(Json(state.admins.list()))
}

/// DELETE /api/admins/:principal - 撤销管理员权限 (拒绝移除最后一名管理员)
pub async fn revoke(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(principal): Path<String>,
) -> AppResult<Json<Vec<String>>> {
    state.admins.revoke(&principal)?;

    security_log!(
        "INFO",
        "admin_revoked",
        principal = principal,
        revoked_by = current_user.id.clone()
    );

    Ok(Json(state.admins.list()))
}
