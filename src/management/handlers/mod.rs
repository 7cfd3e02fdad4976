//! # 请求处理器
//!
//! 处理器只做参数提取和响应封装，业务规则在服务层。

pub mod auth;
pub mod devices;
pub mod engineers;
pub mod inspections;
pub mod projects;
pub mod realtime;
pub mod repairs;
pub mod system;
pub mod users;
