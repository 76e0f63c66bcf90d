//! 카테고리 repository.

use tracing::error;
use uuid::Uuid;

use sheikh_core::{AuthError, AuthResult, Category};

use crate::database::Database;

/// 카테고리 repository.
pub struct CategoryRepository {
    db: Database,
}

impl CategoryRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// 카테고리 한 건을 기록하고 부여된 id를 돌려줍니다.
    pub async fn insert(&self, category: &Category, created_by: &str) -> AuthResult<Uuid> {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO categories (id, section, name, description, sort_order, is_active, created_by)
            VALUES ($1, $2, $3, $4, $5, TRUE, $6)
            "#,
        )
        .bind(id)
        .bind(&category.section)
        .bind(&category.name)
        .bind(&category.description)
        .bind(category.sort_order)
        .bind(created_by)
        .execute(self.db.pool())
        .await
        .map_err(|e| {
            error!(name = %category.name, "category insert failed: {}", e);
            AuthError::Internal(format!("category insert failed: {}", e))
        })?;

        Ok(id)
    }
}
