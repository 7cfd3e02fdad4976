//! # 项目处理器

use axum::Json;
use axum::extract::State;
use serde_json::Value;

use crate::management::error::ManagementResult;
use crate::management::response::success_with_id;
use crate::management::server::AppState;
use crate::services::projects::{CreateProjectRequest, ProjectView};

/// 项目列表
///
/// `GET /api/projects`
pub async fn list_projects(
    State(state): State<AppState>,
) -> ManagementResult<Json<Vec<ProjectView>>> {
    let projects = crate::services::projects::list_projects(state.db.as_ref()).await?;
    Ok(Json(projects))
}

/// 创建项目（含内联设备与工程师）
///
/// `POST /api/projects`
pub async fn create_project(
    State(state): State<AppState>,
    Json(request): Json<CreateProjectRequest>,
) -> ManagementResult<Json<Value>> {
    let project_id =
        crate::services::projects::create_project(state.db.as_ref(), &state.broadcaster, request)
            .await?;
    Ok(success_with_id("project_id", project_id))
}
