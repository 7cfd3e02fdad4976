//! # 项目服务
//!
//! 项目是聚合根：创建时可内联携带设备和工程师，整批写入在同一个
//! 事务里提交，任何一条子记录校验失败都会回滚整个创建。

use chrono::{NaiveDateTime, Utc};
use entity::{devices, engineers, projects, projects::Entity as Projects};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{fmt_iso, is_unique_violation, parse_iso_datetime, required};
use crate::broadcast::{Broadcaster, EventKind};
use crate::management::error::{ManagementError, ManagementResult};

/// 内联设备负载
#[derive(Debug, Deserialize)]
pub struct DevicePayload {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub device_type: Option<String>,
    pub model: Option<String>,
    pub serial: Option<String>,
    pub location: Option<String>,
    pub service_content: Option<String>,
}

/// 内联工程师负载
#[derive(Debug, Deserialize)]
pub struct EngineerPayload {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
}

/// 创建项目请求
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: Option<String>,
    pub client: Option<String>,
    pub contact_person: Option<String>,
    pub contact_phone: Option<String>,
    pub start_date: Option<String>,
    pub frequency: Option<String>,
    pub next_inspection: Option<String>,
    #[serde(default)]
    pub devices: Vec<DevicePayload>,
    #[serde(default)]
    pub engineers: Vec<EngineerPayload>,
}

/// 项目列表视图
#[derive(Debug, Serialize)]
pub struct ProjectView {
    pub id: i32,
    pub name: String,
    pub client: String,
    pub status: String,
    pub next_inspection: Option<String>,
    pub last_inspection: Option<String>,
}

impl From<projects::Model> for ProjectView {
    fn from(project: projects::Model) -> Self {
        Self {
            id: project.id,
            name: project.name,
            client: project.client,
            status: project.status,
            next_inspection: fmt_iso(project.next_inspection),
            last_inspection: fmt_iso(project.last_inspection),
        }
    }
}

/// 列出全部项目
pub async fn list_projects(db: &DatabaseConnection) -> ManagementResult<Vec<ProjectView>> {
    let projects = Projects::find()
        .order_by_asc(projects::Column::Id)
        .all(db)
        .await?;
    Ok(projects.into_iter().map(ProjectView::from).collect())
}

/// 创建项目及内联子记录
pub async fn create_project(
    db: &DatabaseConnection,
    broadcaster: &Broadcaster,
    request: CreateProjectRequest,
) -> ManagementResult<i32> {
    let name = required(request.name, "name")?;
    let client = required(request.client, "client")?;

    let start_date: NaiveDateTime = match request.start_date.as_deref() {
        Some(value) => parse_iso_datetime(value, "start_date")?,
        None => Utc::now().naive_utc(),
    };
    let next_inspection = match request.next_inspection.as_deref() {
        Some(value) => Some(parse_iso_datetime(value, "next_inspection")?),
        None => None,
    };

    let existing = Projects::find()
        .filter(projects::Column::Name.eq(&name))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(ManagementError::conflict("项目名称已存在"));
    }

    let now = Utc::now().naive_utc();

    // 项目和内联子记录在同一事务中提交，中途失败整体回滚
    let txn = db.begin().await?;

    let project = projects::ActiveModel {
        name: Set(name.clone()),
        client: Set(client),
        contact_person: Set(request.contact_person),
        contact_phone: Set(request.contact_phone),
        start_date: Set(Some(start_date)),
        frequency: Set(request.frequency.unwrap_or_else(|| "monthly".to_string())),
        next_inspection: Set(next_inspection),
        status: Set("active".to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let result = Projects::insert(project).exec(&txn).await.map_err(|err| {
        if is_unique_violation(&err) {
            ManagementError::conflict("项目名称已存在")
        } else {
            ManagementError::from(err)
        }
    })?;
    let project_id = result.last_insert_id;

    for device in request.devices {
        let device_name = required(device.name, "devices[].name")?;
        let device_type = required(device.device_type, "devices[].type")?;
        let row = devices::ActiveModel {
            project_id: Set(project_id),
            name: Set(device_name),
            device_type: Set(device_type),
            model: Set(device.model),
            serial: Set(device.serial),
            location: Set(device.location),
            service_content: Set(device.service_content),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        devices::Entity::insert(row).exec(&txn).await?;
    }

    for engineer in request.engineers {
        let engineer_name = required(engineer.name, "engineers[].name")?;
        let phone = required(engineer.phone, "engineers[].phone")?;
        let row = engineers::ActiveModel {
            project_id: Set(project_id),
            name: Set(engineer_name),
            phone: Set(phone),
            position: Set(engineer
                .position
                .unwrap_or_else(|| "Engineer".to_string())),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        engineers::Entity::insert(row).exec(&txn).await?;
    }

    txn.commit().await?;

    // 通知只在事务提交后发出
    broadcaster.publish(
        EventKind::ProjectUpdate,
        json!({
            "type": "created",
            "project_id": project_id,
            "name": name,
        }),
    );

    Ok(project_id)
}
