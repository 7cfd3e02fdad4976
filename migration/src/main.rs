use sea_orm_migration::prelude::*;
use std::env;
use std::path::Path;

/// 与服务端 `DatabaseConfig` 的默认库保持一致
fn default_database_url() -> String {
    // 支持从工作空间根或 migration/ 成员目录下执行
    let db_path = if Path::new("migration").is_dir() {
        "data/dev.db"
    } else {
        "../data/dev.db"
    };
    format!("sqlite://{db_path}")
}

#[tokio::main]
async fn main() {
    if env::var("DATABASE_URL").is_err() {
        unsafe {
            env::set_var("DATABASE_URL", default_database_url());
        }
    }
    cli::run_cli(migration::Migrator).await;
}
