//! # 工程师服务

use entity::{engineers, engineers::Entity as Engineers};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;

use crate::management::error::ManagementResult;

/// 工程师列表视图
#[derive(Debug, Serialize)]
pub struct EngineerView {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub position: String,
}

impl From<engineers::Model> for EngineerView {
    fn from(engineer: engineers::Model) -> Self {
        Self {
            id: engineer.id,
            name: engineer.name,
            phone: engineer.phone,
            position: engineer.position,
        }
    }
}

/// 列出工程师，可按项目过滤
pub async fn list_engineers(
    db: &DatabaseConnection,
    project_id: Option<i32>,
) -> ManagementResult<Vec<EngineerView>> {
    let mut select = Engineers::find().order_by_asc(engineers::Column::Id);
    if let Some(project_id) = project_id {
        select = select.filter(engineers::Column::ProjectId.eq(project_id));
    }
    let engineers = select.all(db).await?;
    Ok(engineers.into_iter().map(EngineerView::from).collect())
}
