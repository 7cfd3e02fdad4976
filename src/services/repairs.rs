//! # 维修工单服务

use chrono::Utc;
use entity::{
    devices::Entity as Devices, projects::Entity as Projects, repairs,
    repairs::Entity as Repairs,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::required;
use crate::broadcast::{Broadcaster, EventKind};
use crate::management::error::{ManagementError, ManagementResult};

/// 创建工单请求
#[derive(Debug, Deserialize)]
pub struct CreateRepairRequest {
    pub project_id: Option<i32>,
    pub device_id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
}

/// 更新工单请求，字段缺省表示不修改
#[derive(Debug, Deserialize)]
pub struct UpdateRepairRequest {
    pub status: Option<String>,
    pub engineer_id: Option<i32>,
}

/// 工单列表视图
#[derive(Debug, Serialize)]
pub struct RepairView {
    pub id: i32,
    pub title: String,
    pub project_id: i32,
    pub device_id: i32,
    pub priority: String,
    pub status: String,
    pub created_at: String,
}

impl From<repairs::Model> for RepairView {
    fn from(repair: repairs::Model) -> Self {
        Self {
            id: repair.id,
            title: repair.title,
            project_id: repair.project_id,
            device_id: repair.device_id,
            priority: repair.priority,
            status: repair.status,
            created_at: repair
                .created_at
                .format("%Y-%m-%dT%H:%M:%S")
                .to_string(),
        }
    }
}

/// 列出全部工单
pub async fn list_repairs(db: &DatabaseConnection) -> ManagementResult<Vec<RepairView>> {
    let repairs = Repairs::find()
        .order_by_asc(repairs::Column::Id)
        .all(db)
        .await?;
    Ok(repairs.into_iter().map(RepairView::from).collect())
}

/// 创建维修工单
pub async fn create_repair(
    db: &DatabaseConnection,
    broadcaster: &Broadcaster,
    request: CreateRepairRequest,
) -> ManagementResult<i32> {
    let Some(project_id) = request.project_id else {
        return Err(ManagementError::validation("缺少必填字段: project_id"));
    };
    let Some(device_id) = request.device_id else {
        return Err(ManagementError::validation("缺少必填字段: device_id"));
    };
    let title = required(request.title, "title")?;
    let description = required(request.description, "description")?;
    let priority = required(request.priority, "priority")?;

    if Projects::find_by_id(project_id).one(db).await?.is_none() {
        return Err(ManagementError::not_found("项目"));
    }
    if Devices::find_by_id(device_id).one(db).await?.is_none() {
        return Err(ManagementError::not_found("设备"));
    }

    let now = Utc::now().naive_utc();
    let repair = repairs::ActiveModel {
        project_id: Set(project_id),
        device_id: Set(device_id),
        title: Set(title),
        description: Set(description),
        priority: Set(priority),
        status: Set("pending".to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let result = Repairs::insert(repair).exec(db).await?;
    let repair_id = result.last_insert_id;

    broadcaster.publish(
        EventKind::RepairUpdate,
        json!({
            "type": "created",
            "repair_id": repair_id,
            "project_id": project_id,
        }),
    );

    Ok(repair_id)
}

/// 更新维修工单
///
/// PATCH 语义：只合并请求里出现的字段，其余保持原值，
/// `updated_at` 总是刷新。
pub async fn update_repair(
    db: &DatabaseConnection,
    broadcaster: &Broadcaster,
    repair_id: i32,
    request: UpdateRepairRequest,
) -> ManagementResult<()> {
    let repair = Repairs::find_by_id(repair_id)
        .one(db)
        .await?
        .ok_or_else(|| ManagementError::not_found("维修工单"))?;

    let mut active: repairs::ActiveModel = repair.into();
    if let Some(status) = request.status {
        active.status = Set(status);
    }
    if let Some(engineer_id) = request.engineer_id {
        active.engineer_id = Set(Some(engineer_id));
    }
    active.updated_at = Set(Utc::now().naive_utc());

    let updated = active.update(db).await?;

    broadcaster.publish(
        EventKind::RepairUpdate,
        json!({
            "type": "updated",
            "repair_id": updated.id,
            "status": updated.status,
        }),
    );

    Ok(())
}
