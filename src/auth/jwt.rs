//! JWT token management
//!
//! Provides JWT token generation and validation functionality

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};

use crate::auth::types::TokenClaims;
use crate::error::{Result, ServiceError};

/// JWT token manager
pub struct JwtManager {
    /// Encoding key
    encoding_key: EncodingKey,
    /// Decoding key
    decoding_key: DecodingKey,
    /// Validation configuration
    validation: Validation,
    /// 令牌有效期（秒）
    expires_in: i64,
}

impl JwtManager {
    /// Create new JWT manager
    #[must_use]
    pub fn new(secret: &str, expires_in: i64) -> Self {
        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 30; // 30 seconds tolerance

        Self {
            encoding_key,
            decoding_key,
            validation,
            expires_in,
        }
    }

    /// 为用户签发访问令牌
    pub fn issue_token(&self, user_id: i32) -> Result<String> {
        let claims = TokenClaims::new(user_id, self.expires_in);
        let header = Header::new(Algorithm::HS256);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| ServiceError::internal(format!("令牌签发失败: {e}")))
    }

    /// 验证并解析令牌
    ///
    /// 签名、格式与过期的所有失败都折叠为同一个认证错误，
    /// 调用方无法也不需要区分失败原因。
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims> {
        let token_data: TokenData<TokenClaims> =
            decode(token, &self.decoding_key, &self.validation)
                .map_err(|_| ServiceError::auth("认证令牌无效"))?;

        let claims = token_data.claims;
        if claims.is_expired() {
            return Err(ServiceError::auth("认证令牌无效"));
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_manager() -> JwtManager {
        JwtManager::new("test-secret-key-for-jwt-testing", 3600)
    }

    #[test]
    fn test_token_generation_and_validation() {
        let manager = create_test_manager();

        let token = manager.issue_token(1).unwrap();
        assert!(!token.is_empty());

        let claims = manager.verify_token(&token).unwrap();
        assert_eq!(claims.user_id, 1);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_invalid_token() {
        let manager = create_test_manager();

        assert!(manager.verify_token("invalid-token").is_err());
        assert!(manager.verify_token("").is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let manager = create_test_manager();
        let token = manager.issue_token(42).unwrap();

        let other = JwtManager::new("another-secret-entirely", 3600);
        assert!(other.verify_token(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        // 负有效期直接产生已过期令牌，超出30秒容差
        let manager = JwtManager::new("test-secret-key-for-jwt-testing", -3600);
        let token = manager.issue_token(1).unwrap();

        let verifier = create_test_manager();
        let result = verifier.verify_token(&token);
        assert!(result.is_err());
        // 过期与格式错误对调用方不可区分
        assert!(matches!(
            result.unwrap_err(),
            crate::error::ServiceError::Auth { .. }
        ));
    }
}
