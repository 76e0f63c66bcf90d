//! 사용자 레코드 repository.
//!
//! [`UserStore`]의 PostgreSQL 구현. 조회 에러의 상세는 여기서 로그로
//! 남기고, 로그인 경로에는 일반화된 메시지만 올립니다.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use tracing::error;
use uuid::Uuid;

use sheikh_core::{AuthError, AuthResult, NewUserRecord, Role, UserRecord, UserStore};

use crate::database::Database;

/// users 테이블 row.
#[derive(Debug, Clone, FromRow)]
struct UserRow {
    uid: Uuid,
    unique_id: String,
    display_name: String,
    role: String,
    password_hash: Option<String>,
    password: Option<String>,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_record(self) -> AuthResult<UserRecord> {
        let role = self.role.parse::<Role>().map_err(|e| {
            error!(uid = %self.uid, "users row carries an unknown role tag: {}", e);
            AuthError::internal()
        })?;

        Ok(UserRecord {
            uid: self.uid,
            unique_id: self.unique_id,
            display_name: self.display_name,
            role,
            password_hash: self.password_hash,
            password: self.password,
            created_at: self.created_at,
        })
    }
}

/// 사용자 레코드 repository.
pub struct UserRepository {
    db: Database,
}

impl UserRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_sheikh_by_unique_id(&self, unique_id: &str) -> AuthResult<Option<UserRecord>> {
        // 중복 unique_id가 존재해도 LIMIT 1로 임의의 한 건만 취한다.
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT uid, unique_id, display_name, role, password_hash, password, created_at
            FROM users
            WHERE unique_id = $1 AND role = $2
            LIMIT 1
            "#,
        )
        .bind(unique_id)
        .bind(Role::Sheikh.as_str())
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| {
            error!("user lookup failed: {}", e);
            AuthError::internal()
        })?;

        row.map(UserRow::into_record).transpose()
    }

    async fn create_user(&self, user: &NewUserRecord) -> AuthResult<UserRecord> {
        // created_at은 테이블 기본값(now())이 부여한다.
        let row: UserRow = sqlx::query_as(
            r#"
            INSERT INTO users (uid, unique_id, display_name, role, password_hash, password)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING uid, unique_id, display_name, role, password_hash, password, created_at
            "#,
        )
        .bind(user.uid)
        .bind(&user.unique_id)
        .bind(&user.display_name)
        .bind(user.role.as_str())
        .bind(&user.password_hash)
        .bind(&user.password)
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| {
            error!("user insert failed: {}", e);
            AuthError::Internal(format!("user insert failed: {}", e))
        })?;

        row.into_record()
    }

    async fn count_sheikhs_by_unique_id(&self, unique_id: &str) -> AuthResult<i64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM users WHERE unique_id = $1 AND role = $2")
                .bind(unique_id)
                .bind(Role::Sheikh.as_str())
                .fetch_one(self.db.pool())
                .await
                .map_err(|e| {
                    error!("user count failed: {}", e);
                    AuthError::Internal(format!("user count failed: {}", e))
                })?;

        Ok(count)
    }
}
