//! # 设备处理器

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use crate::management::error::ManagementResult;
use crate::management::server::AppState;
use crate::services::devices::DeviceView;

/// 设备列表查询参数
#[derive(Debug, Deserialize)]
pub struct ListDevicesQuery {
    pub project_id: Option<i32>,
}

/// 设备列表，支持 `?project_id=` 过滤
///
/// `GET /api/devices`
pub async fn list_devices(
    State(state): State<AppState>,
    Query(query): Query<ListDevicesQuery>,
) -> ManagementResult<Json<Vec<DeviceView>>> {
    let devices =
        crate::services::devices::list_devices(state.db.as_ref(), query.project_id).await?;
    Ok(Json(devices))
}
