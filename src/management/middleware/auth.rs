//! # 认证中间件
//!
//! 从 `Authorization: Bearer <token>` 中取出令牌并验证，再回库确认
//! 用户仍然存在。任何一步失败都返回同一个401，不区分原因。

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use entity::users::Entity as Users;
use sea_orm::EntityTrait;

use crate::management::error::{ManagementError, ManagementResult};
use crate::management::server::AppState;

/// 已认证请求的身份上下文，由中间件注入请求扩展
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: i32,
    pub is_admin: bool,
}

/// 认证中间件入口
pub async fn auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> ManagementResult<Response> {
    let token = extract_bearer_token(&request)?;
    let claims = state.jwt.verify_token(token)?;

    // 令牌签发后被删除的用户立即失效
    let user = Users::find_by_id(claims.user_id)
        .one(state.db.as_ref())
        .await?
        .ok_or_else(|| ManagementError::auth("认证令牌无效"))?;

    request.extensions_mut().insert(AuthContext {
        user_id: user.id,
        is_admin: user.is_admin,
    });

    Ok(next.run(request).await)
}

/// 从请求头中提取Bearer令牌
fn extract_bearer_token(request: &Request) -> ManagementResult<&str> {
    let header = request
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ManagementError::auth("缺少认证令牌"))?;

    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ManagementError::auth("缺少认证令牌"))
}
