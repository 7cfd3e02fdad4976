//! # 设备服务

use entity::{devices, devices::Entity as Devices};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;

use crate::management::error::ManagementResult;

/// 设备列表视图
#[derive(Debug, Serialize)]
pub struct DeviceView {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: String,
    pub model: Option<String>,
    pub location: Option<String>,
}

impl From<devices::Model> for DeviceView {
    fn from(device: devices::Model) -> Self {
        Self {
            id: device.id,
            name: device.name,
            device_type: device.device_type,
            model: device.model,
            location: device.location,
        }
    }
}

/// 列出设备，可按项目过滤
pub async fn list_devices(
    db: &DatabaseConnection,
    project_id: Option<i32>,
) -> ManagementResult<Vec<DeviceView>> {
    let mut select = Devices::find().order_by_asc(devices::Column::Id);
    if let Some(project_id) = project_id {
        select = select.filter(devices::Column::ProjectId.eq(project_id));
    }
    let devices = select.all(db).await?;
    Ok(devices.into_iter().map(DeviceView::from).collect())
}
