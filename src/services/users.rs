//! # 用户服务

use chrono::Utc;
use entity::{users, users::Entity as Users};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{is_unique_violation, required};
use crate::auth::password;
use crate::broadcast::{Broadcaster, EventKind};
use crate::management::error::{ManagementError, ManagementResult};

/// 创建用户请求
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<String>,
    pub is_admin: Option<bool>,
}

/// 用户列表视图，不暴露凭据字段
#[derive(Debug, Serialize)]
pub struct UserView {
    pub id: i32,
    pub username: String,
    pub full_name: String,
    pub role: String,
    pub is_admin: bool,
}

impl From<users::Model> for UserView {
    fn from(user: users::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            full_name: user.full_name,
            role: user.role,
            is_admin: user.is_admin,
        }
    }
}

/// 列出全部用户
pub async fn list_users(db: &DatabaseConnection) -> ManagementResult<Vec<UserView>> {
    let users = Users::find()
        .order_by_asc(users::Column::Id)
        .all(db)
        .await?;
    Ok(users.into_iter().map(UserView::from).collect())
}

/// 创建用户
///
/// 用户名的存在性检查只给友好报错；并发竞争由唯一索引兜底。
pub async fn create_user(
    db: &DatabaseConnection,
    broadcaster: &Broadcaster,
    request: CreateUserRequest,
) -> ManagementResult<i32> {
    let username = required(request.username, "username")?;
    let password = required(request.password, "password")?;
    let full_name = required(request.full_name, "full_name")?;
    let role = required(request.role, "role")?;

    let existing = Users::find()
        .filter(users::Column::Username.eq(&username))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(ManagementError::conflict("用户名已存在"));
    }

    let password_hash = password::hash_password(&password)?;
    let now = Utc::now().naive_utc();

    let user = users::ActiveModel {
        username: Set(username.clone()),
        password_hash: Set(password_hash),
        full_name: Set(full_name),
        role: Set(role),
        is_admin: Set(request.is_admin.unwrap_or(false)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let result = Users::insert(user).exec(db).await.map_err(|err| {
        if is_unique_violation(&err) {
            ManagementError::conflict("用户名已存在")
        } else {
            ManagementError::from(err)
        }
    })?;
    let user_id = result.last_insert_id;

    broadcaster.publish(
        EventKind::UserUpdate,
        json!({
            "type": "created",
            "user_id": user_id,
            "username": username,
        }),
    );

    Ok(user_id)
}
