//! # 巡检服务
//!
//! 巡检记录的插入与所属项目 `last_inspection` 的刷新在同一事务中
//! 完成，保证这个反规范化字段与最新巡检一致。

use chrono::Utc;
use entity::{inspections, projects, projects::Entity as Projects};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};
use serde::Deserialize;
use serde_json::json;

use crate::broadcast::{Broadcaster, EventKind};
use crate::management::error::{ManagementError, ManagementResult};

/// 创建巡检请求
#[derive(Debug, Deserialize)]
pub struct CreateInspectionRequest {
    pub project_id: Option<i32>,
}

/// 创建巡检记录
pub async fn create_inspection(
    db: &DatabaseConnection,
    broadcaster: &Broadcaster,
    request: CreateInspectionRequest,
) -> ManagementResult<i32> {
    let Some(project_id) = request.project_id else {
        return Err(ManagementError::validation("缺少必填字段: project_id"));
    };

    let now = Utc::now().naive_utc();

    let txn = db.begin().await?;

    let project = Projects::find_by_id(project_id)
        .one(&txn)
        .await?
        .ok_or_else(|| ManagementError::not_found("项目"))?;

    let inspection = inspections::ActiveModel {
        project_id: Set(project_id),
        date: Set(now),
        status: Set("inProgress".to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let result = inspections::Entity::insert(inspection).exec(&txn).await?;
    let inspection_id = result.last_insert_id;

    // 刷新项目的最近巡检时间
    let mut project_active: projects::ActiveModel = project.into();
    project_active.last_inspection = Set(Some(now));
    project_active.updated_at = Set(now);
    project_active.update(&txn).await?;

    txn.commit().await?;

    broadcaster.publish(
        EventKind::InspectionUpdate,
        json!({
            "type": "created",
            "inspection_id": inspection_id,
            "project_id": project_id,
        }),
    );

    Ok(inspection_id)
}
