//! # 配置管理模块
//!
//! 处理应用配置加载、验证和管理

mod app_config;
mod database;

pub use app_config::{AppConfig, AuthConfig, ServerConfig};
pub use database::DatabaseConfig;

use std::env;
use std::path::Path;

/// 加载配置
///
/// 读取 `config/config.{RUST_ENV}.toml`（缺省环境为 dev），文件不存在时
/// 回退到内置默认值，随后应用环境变量覆盖，便于纯环境变量部署。
pub fn load_config() -> crate::error::Result<AppConfig> {
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
    let config_file = format!("config/config.{env_name}.toml");

    let mut config = if Path::new(&config_file).exists() {
        let config_content = std::fs::read_to_string(&config_file).map_err(|e| {
            crate::error::ServiceError::config_with_source(
                format!("读取配置文件失败: {config_file}"),
                e,
            )
        })?;
        toml::from_str(&config_content)?
    } else {
        tracing::debug!("配置文件不存在，使用默认配置: {config_file}");
        AppConfig::default()
    };

    apply_env_overrides(&mut config);

    // 验证配置的有效性
    validate_config(&config)?;

    Ok(config)
}

/// 应用环境变量覆盖
///
/// 与原部署约定保持一致：`DATABASE_URL`、`SECRET_KEY`、`PORT`。
fn apply_env_overrides(config: &mut AppConfig) {
    if let Ok(url) = env::var("DATABASE_URL") {
        config.database.url = url;
    }
    if let Ok(secret) = env::var("SECRET_KEY") {
        config.auth.jwt_secret = secret;
    }
    if let Ok(port) = env::var("PORT")
        && let Ok(port) = port.parse::<u16>()
    {
        config.server.port = port;
    }
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> crate::error::Result<()> {
    if config.server.port == 0 {
        return Err(crate::error::ServiceError::config(format!(
            "无效的服务器端口: {}",
            config.server.port
        )));
    }

    if config.database.url.is_empty() {
        return Err(crate::error::ServiceError::config("数据库URL不能为空"));
    }

    if config.database.max_connections == 0 {
        return Err(crate::error::ServiceError::config(
            "数据库最大连接数必须大于0",
        ));
    }

    if config.auth.jwt_secret.is_empty() {
        return Err(crate::error::ServiceError::config("JWT密钥不能为空"));
    }

    if config.auth.token_expires_in <= 0 {
        return Err(crate::error::ServiceError::config(
            "令牌有效期必须大于0秒",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.auth.token_expires_in, 86400);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = AppConfig::default();
        config.database.url = String::new();
        assert!(validate_config(&config).is_err());

        let mut config = AppConfig::default();
        config.auth.token_expires_in = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_config_from_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8000

            [database]
            url = "sqlite://data/test.db"

            [auth]
            jwt_secret = "unit-test-secret"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.database.url, "sqlite://data/test.db");
        // 未给出的字段取默认值
        assert_eq!(config.database.max_connections, 32);
        assert_eq!(config.auth.token_expires_in, 86400);
    }
}
