//! # 维修工单实体定义

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 维修工单实体，关联项目与设备，可选指派工程师
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "repairs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub project_id: i32,
    pub device_id: i32,
    pub engineer_id: Option<i32>,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub priority: String,
    /// 工单状态为自由字符串，不做封闭状态机约束
    pub status: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::projects::Entity",
        from = "Column::ProjectId",
        to = "super::projects::Column::Id"
    )]
    Projects,
    #[sea_orm(
        belongs_to = "super::devices::Entity",
        from = "Column::DeviceId",
        to = "super::devices::Column::Id"
    )]
    Devices,
    #[sea_orm(
        belongs_to = "super::engineers::Entity",
        from = "Column::EngineerId",
        to = "super::engineers::Column::Id"
    )]
    Engineers,
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl Related<super::devices::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Devices.def()
    }
}

impl Related<super::engineers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Engineers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
