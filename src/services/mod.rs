//! # 实体服务层
//!
//! 各实体的业务规则：必填校验、唯一性检查、默认值填充、级联创建与
//! 部分更新。服务函数只依赖显式传入的数据库连接和广播器。

pub mod auth;
pub mod devices;
pub mod engineers;
pub mod inspections;
pub mod projects;
pub mod repairs;
pub mod users;

use crate::management::error::{ManagementError, ManagementResult};
use chrono::NaiveDateTime;
use sea_orm::{DbErr, SqlErr};

/// 校验必填字段存在且非空
pub(crate) fn required(value: Option<String>, field: &str) -> ManagementResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ManagementError::validation(format!(
            "缺少必填字段: {field}"
        ))),
    }
}

/// 解析 ISO-8601 日期时间字符串
///
/// 接受带时区的 RFC 3339、无时区的 `YYYY-MM-DDTHH:MM:SS` 以及纯日期。
pub(crate) fn parse_iso_datetime(value: &str, field: &str) -> ManagementResult<NaiveDateTime> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(value) {
        return Ok(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt);
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN));
    }
    Err(ManagementError::validation(format!(
        "字段 {field} 不是合法的 ISO-8601 日期: {value}"
    )))
}

/// 格式化可空时间戳为 ISO-8601 字符串
pub(crate) fn fmt_iso(value: Option<NaiveDateTime>) -> Option<String> {
    value.map(|dt| dt.format("%Y-%m-%dT%H:%M:%S").to_string())
}

/// 判断数据库错误是否为唯一约束冲突
///
/// 应用层的存在性检查只是快速路径，真正的唯一性由库里的唯一索引
/// 保证；并发插入撞到约束时据此转为冲突错误。
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
