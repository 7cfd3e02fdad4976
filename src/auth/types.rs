//! # 认证相关类型

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// JWT载荷
///
/// 仅携带用户标识与时间戳，不做权限快照——权限以数据库为准。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 用户ID
    pub user_id: i32,
    /// 过期时间（Unix时间戳，秒）
    pub exp: i64,
    /// 签发时间（Unix时间戳，秒）
    pub iat: i64,
}

impl TokenClaims {
    /// 构造新的载荷，有效期从当前时刻起 `expires_in` 秒
    #[must_use]
    pub fn new(user_id: i32, expires_in: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            user_id,
            exp: now + expires_in,
            iat: now,
        }
    }

    /// 是否已过期
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.exp < Utc::now().timestamp()
    }
}
