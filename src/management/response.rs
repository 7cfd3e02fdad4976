//! # API 响应构造
//!
//! 成功响应统一携带 `success: true` 标记字段（与HTTP状态冗余，
//! 为兼容既有前端保留）。

use axum::Json;
use serde_json::{Value, json};

/// 带单个标识字段的成功响应，如 `{"success": true, "user_id": 3}`
#[must_use]
pub fn success_with_id(key: &str, id: i32) -> Json<Value> {
    Json(json!({ "success": true, key: id }))
}

/// 纯确认成功响应
#[must_use]
pub fn success() -> Json<Value> {
    Json(json!({ "success": true }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_shapes() {
        let Json(body) = success_with_id("project_id", 42);
        assert_eq!(body["success"], true);
        assert_eq!(body["project_id"], 42);

        let Json(body) = success();
        assert_eq!(body, json!({"success": true}));
    }
}
