//! # 数据库配置

use serde::{Deserialize, Serialize};

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// 数据库连接URL，支持 sqlite 与 postgres
    pub url: String,
    /// 连接池最大连接数
    pub max_connections: u32,
    /// 建立连接超时（秒）
    pub connect_timeout: u64,
    /// 获取连接超时（秒），兼作单次数据库操作的等待上限
    pub acquire_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://data/dev.db".to_string(),
            max_connections: 32,
            connect_timeout: 10,
            acquire_timeout: 10,
        }
    }
}
