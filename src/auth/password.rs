//! # 密码哈希
//!
//! bcrypt 哈希与校验。库中不存明文口令，比较由 bcrypt 完成。

use crate::error::{Result, ServiceError};
use bcrypt::{DEFAULT_COST, hash, verify};

/// 对明文密码做 bcrypt 哈希
pub fn hash_password(password: &str) -> Result<String> {
    hash(password, DEFAULT_COST).map_err(|e| ServiceError::internal(format!("密码哈希失败: {e}")))
}

/// 校验明文密码与存储的哈希是否匹配
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool> {
    verify(password, password_hash)
        .map_err(|e| ServiceError::internal(format!("密码校验失败: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hashed = hash_password("ht886631").unwrap();
        assert_ne!(hashed, "ht886631");
        assert!(verify_password("ht886631", &hashed).unwrap());
        assert!(!verify_password("wrong-password", &hashed).unwrap());
    }
}
