//! # 实体定义测试
//!
//! 测试各实体 ActiveModel 的构造与默认行为

#[cfg(test)]
mod tests {
    use crate::{devices, projects, repairs, users};
    use sea_orm::Set;

    #[tokio::test]
    async fn test_user_entity_creation() {
        let user = users::ActiveModel {
            username: Set("test_user".to_string()),
            password_hash: Set("hash123".to_string()),
            full_name: Set("测试用户".to_string()),
            role: Set("operator".to_string()),
            is_admin: Set(false),
            ..Default::default()
        };

        assert_eq!(user.username.as_ref(), "test_user");
        assert_eq!(user.is_admin.as_ref(), &false);
        // 未显式赋值的字段保持 NotSet，由插入时填充
        assert!(matches!(user.device_id, sea_orm::ActiveValue::NotSet));
    }

    #[tokio::test]
    async fn test_project_entity_creation() {
        let project = projects::ActiveModel {
            name: Set("某大厦空调维保".to_string()),
            client: Set("某物业公司".to_string()),
            frequency: Set("monthly".to_string()),
            status: Set("active".to_string()),
            ..Default::default()
        };

        assert_eq!(project.name.as_ref(), "某大厦空调维保");
        assert_eq!(project.status.as_ref(), "active");
        assert!(matches!(
            project.last_inspection,
            sea_orm::ActiveValue::NotSet
        ));
    }

    #[tokio::test]
    async fn test_device_entity_creation() {
        let device = devices::ActiveModel {
            project_id: Set(1),
            name: Set("冷水机组1号".to_string()),
            device_type: Set("chiller".to_string()),
            model: Set(Some("XR-2000".to_string())),
            ..Default::default()
        };

        assert_eq!(device.project_id.as_ref(), &1);
        assert_eq!(device.device_type.as_ref(), "chiller");
    }

    #[tokio::test]
    async fn test_repair_entity_creation() {
        let repair = repairs::ActiveModel {
            project_id: Set(1),
            device_id: Set(2),
            title: Set("水泵漏水".to_string()),
            description: Set("地下室主水泵接口处渗漏".to_string()),
            priority: Set("high".to_string()),
            status: Set("pending".to_string()),
            ..Default::default()
        };

        assert_eq!(repair.status.as_ref(), "pending");
        assert!(matches!(repair.engineer_id, sea_orm::ActiveValue::NotSet));
    }
}
