//! # 用户处理器

use axum::Json;
use axum::extract::State;
use serde_json::Value;

use crate::management::error::ManagementResult;
use crate::management::response::success_with_id;
use crate::management::server::AppState;
use crate::services::users::{CreateUserRequest, UserView};

/// 用户列表
///
/// `GET /api/users`
pub async fn list_users(State(state): State<AppState>) -> ManagementResult<Json<Vec<UserView>>> {
    let users = crate::services::users::list_users(state.db.as_ref()).await?;
    Ok(Json(users))
}

/// 创建用户
///
/// `POST /api/users`
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> ManagementResult<Json<Value>> {
    let user_id =
        crate::services::users::create_user(state.db.as_ref(), &state.broadcaster, request)
            .await?;
    Ok(success_with_id("user_id", user_id))
}
