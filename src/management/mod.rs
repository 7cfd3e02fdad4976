//! # 管理接口模块
//!
//! Axum HTTP 服务器、路由、中间件与各资源的处理器

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;

pub use server::{AppState, ManagementConfig, ManagementServer};
