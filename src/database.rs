//! # 数据库模块
//!
//! 数据库连接、迁移管理与初始数据填充

use crate::config::DatabaseConfig;
use entity::users;
use sea_orm::{
    ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, Set,
};
use sea_orm_migration::MigratorTrait;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error, info};

/// 默认管理员账号，首次启动且用户表为空时创建
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "ht886631";

/// 初始化数据库连接
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let database_url = config.url.as_str();
    info!(
        "正在连接数据库: {}",
        if database_url.starts_with("sqlite:") {
            &database_url[..std::cmp::min(database_url.len(), 50)]
        } else {
            database_url
        }
    );

    // 对于SQLite数据库，确保数据库文件的目录和文件存在
    if database_url.starts_with("sqlite:") && !database_url.contains(":memory:") {
        let db_path = database_url
            .strip_prefix("sqlite://")
            .unwrap_or(database_url.strip_prefix("sqlite:").unwrap_or(database_url));
        let db_file_path = Path::new(db_path);

        if let Some(parent_dir) = db_file_path.parent()
            && !parent_dir.exists()
        {
            debug!("创建数据库目录: {}", parent_dir.display());
            std::fs::create_dir_all(parent_dir).map_err(|e| {
                DbErr::Custom(format!(
                    "无法创建数据库目录 {}: {}",
                    parent_dir.display(),
                    e
                ))
            })?;
        }

        if !db_file_path.exists() {
            debug!("创建数据库文件: {}", db_file_path.display());
            std::fs::File::create(db_file_path).map_err(|e| {
                DbErr::Custom(format!(
                    "无法创建数据库文件 {}: {}",
                    db_file_path.display(),
                    e
                ))
            })?;
        }
    }

    let mut options = ConnectOptions::new(database_url);
    options
        .max_connections(config.max_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout))
        .acquire_timeout(Duration::from_secs(config.acquire_timeout))
        .sqlx_logging(false);

    let db = Database::connect(options).await?;

    info!("数据库连接成功");
    Ok(db)
}

/// 运行数据库迁移
pub async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    info!("开始运行数据库迁移...");

    match ::migration::Migrator::up(db, None).await {
        Ok(()) => {
            info!("数据库迁移完成");
            Ok(())
        }
        Err(e) => {
            error!("数据库迁移失败: {}", e);
            Err(e)
        }
    }
}

/// 确保默认管理员存在
///
/// 用户表为空时创建默认管理员账号。密码在插入时做 bcrypt 哈希，
/// 库中不落明文。
pub async fn ensure_default_admin(db: &DatabaseConnection) -> Result<(), DbErr> {
    let user_count = users::Entity::find().count(db).await?;
    if user_count > 0 {
        debug!("用户表非空，跳过默认管理员初始化");
        return Ok(());
    }

    let password_hash = crate::auth::password::hash_password(DEFAULT_ADMIN_PASSWORD)
        .map_err(|e| DbErr::Custom(format!("默认管理员密码哈希失败: {e}")))?;

    let now = chrono::Utc::now().naive_utc();
    let admin = users::ActiveModel {
        username: Set(DEFAULT_ADMIN_USERNAME.to_string()),
        password_hash: Set(password_hash),
        full_name: Set("系统管理员".to_string()),
        role: Set("admin".to_string()),
        is_admin: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    admin.insert(db).await?;

    info!("创建默认用户: {DEFAULT_ADMIN_USERNAME}");
    Ok(())
}
