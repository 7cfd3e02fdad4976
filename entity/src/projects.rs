//! # 项目实体定义
//!
//! 维保项目表，是设备、工程师、巡检和维修工单的聚合根

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 项目实体
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub client: String,
    pub contact_person: Option<String>,
    pub contact_phone: Option<String>,
    pub start_date: Option<DateTime>,
    pub frequency: String,
    pub next_inspection: Option<DateTime>,
    /// 最近一次巡检时间，创建巡检记录时同步刷新
    pub last_inspection: Option<DateTime>,
    pub status: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::devices::Entity")]
    Devices,
    #[sea_orm(has_many = "super::engineers::Entity")]
    Engineers,
    #[sea_orm(has_many = "super::inspections::Entity")]
    Inspections,
    #[sea_orm(has_many = "super::repairs::Entity")]
    Repairs,
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

impl Related<super::inspections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Inspections.def()
    }
}

impl Related<super::repairs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Repairs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
