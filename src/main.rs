//! # 维保管理平台服务入口

use std::sync::Arc;

use maintenance_api::auth::JwtManager;
use maintenance_api::broadcast::Broadcaster;
use maintenance_api::management::{ManagementConfig, ManagementServer};
use maintenance_api::{config, database, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging(None);

    let app_config = config::load_config()?;
    tracing::info!(
        "配置加载完成: {}:{}",
        app_config.server.host,
        app_config.server.port
    );

    let db = database::init_database(&app_config.database).await?;
    database::run_migrations(&db).await?;
    database::ensure_default_admin(&db).await?;

    let jwt = JwtManager::new(
        &app_config.auth.jwt_secret,
        app_config.auth.token_expires_in,
    );
    let broadcaster = Broadcaster::default();

    let management_config = ManagementConfig {
        bind_address: app_config.server.host.clone(),
        port: app_config.server.port,
        static_dir: app_config.server.static_dir.clone(),
        ..ManagementConfig::default()
    };

    let server = ManagementServer::new(
        management_config,
        Arc::new(db),
        Arc::new(jwt),
        Arc::new(broadcaster),
    )?;

    server.serve().await?;

    Ok(())
}
