//! # 认证模块
//!
//! JWT 令牌签发/验证与密码哈希

pub mod jwt;
pub mod password;
pub mod types;

pub use jwt::JwtManager;
pub use types::TokenClaims;
