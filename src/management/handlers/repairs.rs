//! # 维修工单处理器

use axum::Json;
use axum::extract::{Path, State};
use serde_json::Value;

use crate::management::error::ManagementResult;
use crate::management::response::{success, success_with_id};
use crate::management::server::AppState;
use crate::services::repairs::{CreateRepairRequest, RepairView, UpdateRepairRequest};

/// 工单列表
///
/// `GET /api/repairs`
pub async fn list_repairs(
    State(state): State<AppState>,
) -> ManagementResult<Json<Vec<RepairView>>> {
    let repairs = crate::services::repairs::list_repairs(state.db.as_ref()).await?;
    Ok(Json(repairs))
}

/// 创建维修工单
///
/// `POST /api/repairs`
pub async fn create_repair(
    State(state): State<AppState>,
    Json(request): Json<CreateRepairRequest>,
) -> ManagementResult<Json<Value>> {
    let repair_id =
        crate::services::repairs::create_repair(state.db.as_ref(), &state.broadcaster, request)
            .await?;
    Ok(success_with_id("repair_id", repair_id))
}

/// 更新维修工单（部分更新）
///
/// `PUT /api/repairs/{id}`
pub async fn update_repair(
    State(state): State<AppState>,
    Path(repair_id): Path<i32>,
    Json(request): Json<UpdateRepairRequest>,
) -> ManagementResult<Json<Value>> {
    crate::services::repairs::update_repair(
        state.db.as_ref(),
        &state.broadcaster,
        repair_id,
        request,
    )
    .await?;
    Ok(success())
}
