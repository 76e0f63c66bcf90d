//! 환경 변수 기반 설정.
//!
//! 외부 서비스 핸들은 프로세스 시작 시 한 번 만들어져 주입되므로, 설정도
//! 시작 시점에 한 번 읽습니다.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tracing::warn;

use crate::credential::CredentialPolicy;

/// API 서버 설정.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 바인딩할 호스트
    pub host: String,
    /// 바인딩할 포트
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// `API_HOST` / `API_PORT` 환경 변수에서 로드합니다.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let host = std::env::var("API_HOST").unwrap_or(defaults.host);
        let port = std::env::var("API_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        Self { host, port }
    }

    /// 소켓 주소 반환.
    ///
    /// # Errors
    /// `host:port` 형식이 유효하지 않으면 `AddrParseError`를 반환합니다.
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

/// 토큰 발급 및 자격 증명 정책 설정.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// 토큰 서명 비밀 키
    pub token_secret: String,
    /// 발급 토큰의 수명 (분)
    pub token_ttl_minutes: i64,
    /// 평문 자격 증명 경로 허용 여부
    pub allow_plaintext_credentials: bool,
}

/// 개발용 기본 서명 키. 운영 환경에서는 반드시 교체.
const DEV_TOKEN_SECRET: &str = "sheikh-dev-secret-change-me-minimum-32-chars";

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: DEV_TOKEN_SECRET.to_string(),
            token_ttl_minutes: 60,
            allow_plaintext_credentials: true,
        }
    }
}

impl AuthConfig {
    /// `SHEIKH_TOKEN_SECRET` / `SHEIKH_TOKEN_TTL_MINUTES` /
    /// `SHEIKH_ALLOW_PLAINTEXT` 환경 변수에서 로드합니다.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let token_secret = match std::env::var("SHEIKH_TOKEN_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                warn!("SHEIKH_TOKEN_SECRET not set, using the development signing key");
                defaults.token_secret
            }
        };

        let token_ttl_minutes = std::env::var("SHEIKH_TOKEN_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.token_ttl_minutes);

        let allow_plaintext_credentials = std::env::var("SHEIKH_ALLOW_PLAINTEXT")
            .map(|v| !(v == "0" || v.eq_ignore_ascii_case("false")))
            .unwrap_or(defaults.allow_plaintext_credentials);

        Self {
            token_secret,
            token_ttl_minutes,
            allow_plaintext_credentials,
        }
    }

    /// 검증 정책으로 변환합니다.
    pub fn credential_policy(&self) -> CredentialPolicy {
        CredentialPolicy {
            allow_plaintext: self.allow_plaintext_credentials,
        }
    }
}
