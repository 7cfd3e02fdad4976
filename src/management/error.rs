//! # 管理接口错误处理
//!
//! 服务层错误到 HTTP 响应的统一翻译：所有错误以
//! `{success: false, message}` 返回，意外的内部错误只记日志，
//! 不向客户端泄漏细节。

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::ServiceError;

/// 管理接口错误类型
#[derive(Debug, thiserror::Error)]
pub enum ManagementError {
    /// 认证错误（凭据错误、令牌无效或过期）
    #[error("{message}")]
    Auth { message: String },

    /// 验证错误（必填字段缺失或格式非法）
    #[error("{message}")]
    Validation { message: String },

    /// 资源未找到
    #[error("{resource}不存在")]
    NotFound { resource: String },

    /// 唯一性冲突
    #[error("{message}")]
    Conflict { message: String },

    /// 数据库或其他内部故障，对外只给笼统提示
    #[error("服务器内部错误")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl ManagementError {
    /// 创建认证错误
    pub fn auth<T: Into<String>>(message: T) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// 创建验证错误
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// 创建资源未找到错误
    pub fn not_found<T: Into<String>>(resource: T) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// 创建唯一性冲突错误
    pub fn conflict<T: Into<String>>(message: T) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// 创建内部错误
    pub fn internal<E: Into<anyhow::Error>>(source: E) -> Self {
        Self::Internal {
            source: source.into(),
        }
    }
}

impl From<sea_orm::DbErr> for ManagementError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::internal(err)
    }
}

impl From<ServiceError> for ManagementError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Auth { message } => Self::Auth { message },
            ServiceError::Business { message } => Self::Validation { message },
            other => Self::internal(anyhow::Error::new(other)),
        }
    }
}

impl IntoResponse for ManagementError {
    fn into_response(self) -> Response {
        // 冲突与验证错误都按原接口约定返回400
        let status = match &self {
            Self::Auth { .. } => StatusCode::UNAUTHORIZED,
            Self::Validation { .. } | Self::Conflict { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { source } => {
                tracing::error!("未预期的内部错误: {source:?}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(serde_json::json!({
            "success": false,
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// 管理接口结果类型
pub type ManagementResult<T> = std::result::Result<T, ManagementError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let resp = ManagementError::auth("用户名或密码错误").into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let resp = ManagementError::validation("缺少必填字段: name").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = ManagementError::conflict("项目名称已存在").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = ManagementError::not_found("维修工单").into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp =
            ManagementError::internal(anyhow::anyhow!("connection refused")).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_error_does_not_leak_detail() {
        let err = ManagementError::internal(anyhow::anyhow!("password column missing"));
        assert_eq!(err.to_string(), "服务器内部错误");
    }
}
