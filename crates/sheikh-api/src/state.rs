//! 모든 핸들러에서 공유되는 애플리케이션 상태.
//!
//! 외부 서비스 핸들(저장소, 토큰 발급자)은 프로세스 시작 시 한 번
//! 만들어져 이 구조체로 주입됩니다. 핸들러는 전역 상태를 조회하지
//! 않습니다.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use sheikh_core::{CredentialPolicy, TokenIssuer, UserStore};
use sheikh_store::Database;

/// 애플리케이션 공유 상태.
#[derive(Clone)]
pub struct AppState {
    /// 사용자 레코드 저장소
    pub store: Arc<dyn UserStore>,

    /// 커스텀 토큰 발급자
    pub token_issuer: Arc<dyn TokenIssuer>,

    /// 자격 증명 검증 정책
    pub credential_policy: CredentialPolicy,

    /// 데이터베이스 핸들 (readiness 확인용)
    pub db: Option<Database>,

    /// API 버전
    pub version: String,

    /// 서버 시작 시간 (업타임 계산용)
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn UserStore>,
        token_issuer: Arc<dyn TokenIssuer>,
        credential_policy: CredentialPolicy,
        db: Option<Database>,
    ) -> Self {
        Self {
            store,
            token_issuer,
            credential_policy,
            db,
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: Utc::now(),
        }
    }

    /// 서버 업타임(초).
    pub fn uptime_secs(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }

    /// 데이터베이스 연결 상태 확인.
    pub async fn is_db_healthy(&self) -> bool {
        match &self.db {
            Some(db) => db.health_check().await.is_ok(),
            None => false,
        }
    }
}

/// 인메모리 저장소를 쓰는 테스트용 상태.
#[cfg(any(test, feature = "test-utils"))]
pub fn create_test_state(records: Vec<sheikh_core::UserRecord>) -> Arc<AppState> {
    use crate::auth::JwtTokenIssuer;
    use sheikh_core::testing::MemoryUserStore;

    let store = Arc::new(MemoryUserStore::with_records(records));
    let issuer = Arc::new(JwtTokenIssuer::new(
        "test-secret-key-for-jwt-testing-minimum-32-chars",
        60,
    ));

    Arc::new(AppState::new(
        store,
        issuer,
        CredentialPolicy::default(),
        None,
    ))
}
