//! # 登录处理器

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::management::error::ManagementResult;
use crate::management::server::AppState;
use crate::services::auth::LoginRequest;

/// 用户登录
///
/// `POST /api/login`
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ManagementResult<Json<Value>> {
    let output = crate::services::auth::login(state.db.as_ref(), &state.jwt, request).await?;

    Ok(Json(json!({
        "success": true,
        "token": output.token,
        "user": output.user,
    })))
}
