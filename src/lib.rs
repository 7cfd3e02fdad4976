//! # 维保管理平台核心库
//!
//! 面向内部维保团队的项目、设备、巡检与工单管理服务

pub mod auth;
pub mod broadcast;
pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod management;
pub mod services;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{Result, ServiceError};
