//! # 巡检处理器

use axum::Json;
use axum::extract::State;
use serde_json::Value;

use crate::management::error::ManagementResult;
use crate::management::response::success_with_id;
use crate::management::server::AppState;
use crate::services::inspections::CreateInspectionRequest;

/// 创建巡检记录
///
/// `POST /api/inspections`
pub async fn create_inspection(
    State(state): State<AppState>,
    Json(request): Json<CreateInspectionRequest>,
) -> ManagementResult<Json<Value>> {
    let inspection_id = crate::services::inspections::create_inspection(
        state.db.as_ref(),
        &state.broadcaster,
        request,
    )
    .await?;
    Ok(success_with_id("inspection_id", inspection_id))
}
