//! # 登录服务

use chrono::Utc;
use entity::{users, users::Entity as Users};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};

use super::required;
use crate::auth::{JwtManager, password};
use crate::management::error::{ManagementError, ManagementResult};

/// 登录请求
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub device_id: Option<String>,
}

/// 登录返回的用户信息
#[derive(Debug, Serialize)]
pub struct LoginUser {
    pub id: i32,
    pub username: String,
    pub full_name: String,
    pub role: String,
    pub is_admin: bool,
    pub avatar: String,
}

/// 登录结果
#[derive(Debug, Serialize)]
pub struct LoginOutput {
    pub token: String,
    pub user: LoginUser,
}

/// 用户登录
///
/// 凭据错误不区分"用户不存在"与"密码错误"，统一返回同一提示。
pub async fn login(
    db: &DatabaseConnection,
    jwt: &JwtManager,
    request: LoginRequest,
) -> ManagementResult<LoginOutput> {
    let username = required(request.username, "username")?;
    let password_input = required(request.password, "password")?;

    let user = Users::find()
        .filter(users::Column::Username.eq(&username))
        .one(db)
        .await?;

    let Some(user) = user else {
        return Err(ManagementError::auth("用户名或密码错误"));
    };

    if !password::verify_password(&password_input, &user.password_hash)? {
        return Err(ManagementError::auth("用户名或密码错误"));
    }

    // 客户端上报设备ID时随登录更新
    let user = if let Some(device_id) = request.device_id {
        let mut active: users::ActiveModel = user.into();
        active.device_id = Set(Some(device_id));
        active.updated_at = Set(Utc::now().naive_utc());
        active.update(db).await?
    } else {
        user
    };

    let token = jwt.issue_token(user.id)?;

    let avatar = user
        .full_name
        .chars()
        .next()
        .map_or_else(|| "U".to_string(), |c| c.to_string());

    Ok(LoginOutput {
        token,
        user: LoginUser {
            id: user.id,
            username: user.username,
            full_name: user.full_name,
            role: user.role,
            is_admin: user.is_admin,
            avatar,
        },
    })
}
