//! # 管理接口中间件

pub mod auth;

pub use auth::AuthContext;
