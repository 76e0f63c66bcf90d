//! JWT 커스텀 토큰 발급.
//!
//! 외부 Token Issuer에 해당하는 운영 구현입니다. principal의 내부
//! 식별자를 subject로, 역할을 클레임으로 담은 시간 제한 HS256 토큰을
//! 발급합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use sheikh_core::{AuthConfig, AuthError, AuthResult, Role, TokenIssuer};

/// 커스텀 토큰 페이로드.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheikhClaims {
    /// Subject - principal의 내부 식별자
    pub sub: String,
    /// 역할 클레임
    pub role: Role,
    /// 발급 시각 (Unix timestamp)
    pub iat: i64,
    /// 만료 시각 (Unix timestamp)
    pub exp: i64,
}

/// HS256 JWT 발급자.
pub struct JwtTokenIssuer {
    secret: String,
    ttl_minutes: i64,
}

impl JwtTokenIssuer {
    pub fn new(secret: impl Into<String>, ttl_minutes: i64) -> Self {
        Self {
            secret: secret.into(),
            ttl_minutes,
        }
    }

    /// 인증 설정에서 발급자를 만듭니다.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.token_secret.clone(), config.token_ttl_minutes)
    }

    /// 토큰을 디코딩하고 서명/만료를 검증합니다.
    pub fn decode(&self, token: &str) -> AuthResult<SheikhClaims> {
        let mut validation = Validation::default();
        validation.validate_exp = true;

        decode::<SheikhClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| AuthError::Internal(format!("token decode failed: {}", e)))
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, uid: &Uuid, role: Role) -> AuthResult<String> {
        let now = Utc::now();
        let claims = SheikhClaims {
            sub: uid.to_string(),
            role,
            iat: now.timestamp(),
            exp: (now + Duration::minutes(self.ttl_minutes)).timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| {
            // 발급 실패의 상세는 호출자에게 노출하지 않는다
            error!("token issuance failed: {}", e);
            AuthError::internal()
        })
    }
}
