//! Credential Store 접근 seam.
//!
//! 인증과 프로비저닝은 이 트레이트로 주입된 핸들을 통해서만 저장소에
//! 접근합니다. 운영 구현은 `sheikh-store`의 PostgreSQL repository입니다.

use async_trait::async_trait;

use crate::domain::{NewUserRecord, UserRecord};
use crate::error::AuthResult;

/// 사용자 레코드 저장소.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// `unique_id`와 sheikh 역할로 최대 한 건을 조회합니다.
    ///
    /// 동일 `unique_id`의 레코드가 여럿 존재해도 에러 없이 임의의 한 건을
    /// 돌려줍니다. 전역 유일성은 기록 시점에 강제되지 않습니다.
    async fn find_sheikh_by_unique_id(&self, unique_id: &str) -> AuthResult<Option<UserRecord>>;

    /// 새 레코드를 기록하고 저장된 형태를 돌려줍니다.
    ///
    /// `created_at`은 저장소가 기록 시점에 부여합니다.
    async fn create_user(&self, user: &NewUserRecord) -> AuthResult<UserRecord>;

    /// 같은 `unique_id`를 가진 sheikh 레코드 수.
    ///
    /// 프로비저닝이 중복 생성을 경고하는 데 사용합니다.
    async fn count_sheikhs_by_unique_id(&self, unique_id: &str) -> AuthResult<i64>;
}
