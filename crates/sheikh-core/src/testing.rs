//! 테스트 더블.
//!
//! `test-utils` feature 또는 테스트 빌드에서만 컴파일됩니다.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::{NewUserRecord, Role, UserRecord};
use crate::error::{AuthError, AuthResult};
use crate::store::UserStore;
use crate::token::TokenIssuer;

/// 인메모리 [`UserStore`].
///
/// 저장소 접근 횟수를 세어 "검증 실패는 저장소 조회 전에 일어난다" 같은
/// 순서 속성을 단언할 수 있습니다.
#[derive(Default)]
pub struct MemoryUserStore {
    records: Mutex<Vec<UserRecord>>,
    queries: AtomicUsize,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 초기 레코드를 담아 생성합니다.
    pub fn with_records(records: Vec<UserRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            queries: AtomicUsize::new(0),
        }
    }

    /// 지금까지의 저장소 접근(조회/기록) 횟수.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    /// 저장된 레코드의 스냅샷.
    pub fn records(&self) -> Vec<UserRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_sheikh_by_unique_id(&self, unique_id: &str) -> AuthResult<Option<UserRecord>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.role == Role::Sheikh && r.unique_id == unique_id)
            .cloned())
    }

    async fn create_user(&self, user: &NewUserRecord) -> AuthResult<UserRecord> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        let record = UserRecord {
            uid: user.uid,
            unique_id: user.unique_id.clone(),
            display_name: user.display_name.clone(),
            role: user.role,
            password_hash: user.password_hash.clone(),
            password: user.password.clone(),
            created_at: Utc::now(),
        };
        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn count_sheikhs_by_unique_id(&self, unique_id: &str) -> AuthResult<i64> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.role == Role::Sheikh && r.unique_id == unique_id)
            .count() as i64)
    }
}

/// 고정 형식 문자열을 돌려주는 [`TokenIssuer`].
pub struct StaticTokenIssuer;

impl TokenIssuer for StaticTokenIssuer {
    fn issue(&self, uid: &Uuid, role: Role) -> AuthResult<String> {
        Ok(format!("token:{}:{}", uid, role))
    }
}

/// 항상 실패하는 [`TokenIssuer`]. Internal 전파 검증용.
pub struct FailingTokenIssuer;

impl TokenIssuer for FailingTokenIssuer {
    fn issue(&self, _uid: &Uuid, _role: Role) -> AuthResult<String> {
        Err(AuthError::internal())
    }
}

/// sheikh 레코드 생성 헬퍼.
pub fn sheikh_record(
    unique_id: &str,
    password_hash: Option<&str>,
    password: Option<&str>,
) -> UserRecord {
    UserRecord {
        uid: Uuid::new_v4(),
        unique_id: unique_id.to_string(),
        display_name: "الشيخ محمد أحمد".to_string(),
        role: Role::Sheikh,
        password_hash: password_hash.map(str::to_string),
        password: password.map(str::to_string),
        created_at: Utc::now(),
    }
}
