//! # 系统处理器

use axum::Json;
use serde_json::{Value, json};

/// 存活探测
///
/// `GET /ping`
pub async fn ping_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// 未部署前端产物时的根路径提示
pub async fn root_handler() -> &'static str {
    "maintenance-api is running"
}
