//! API 라우트.
//!
//! # 라우트 구조
//!
//! - `/health` - 헬스 체크 (liveness)
//! - `/health/ready` - 상세 헬스 체크 (readiness)
//! - `/api/v1/auth/sheikh-login` - Sheikh 로그인

pub mod auth;
pub mod health;

pub use auth::{auth_router, LoginRequest, LoginResponse};
pub use health::{health_router, ComponentHealth, ComponentStatus, HealthResponse};

use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

/// 전체 API 라우터 생성.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/health", health_router())
        .nest("/api/v1/auth", auth_router())
}
