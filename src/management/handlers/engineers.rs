//! # 工程师处理器

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use crate::management::error::ManagementResult;
use crate::management::server::AppState;
use crate::services::engineers::EngineerView;

/// 工程师列表查询参数
#[derive(Debug, Deserialize)]
pub struct ListEngineersQuery {
    pub project_id: Option<i32>,
}

/// 工程师列表，支持 `?project_id=` 过滤
///
/// `GET /api/engineers`
pub async fn list_engineers(
    State(state): State<AppState>,
    Query(query): Query<ListEngineersQuery>,
) -> ManagementResult<Json<Vec<EngineerView>>> {
    let engineers =
        crate::services::engineers::list_engineers(state.db.as_ref(), query.project_id).await?;
    Ok(Json(engineers))
}
