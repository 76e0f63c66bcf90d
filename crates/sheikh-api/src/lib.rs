//! REST API 서버.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - Axum 기반 REST API (sheikh 로그인)
//! - JWT 커스텀 토큰 발급
//! - 헬스 체크 엔드포인트
//! - OpenAPI 문서 및 Swagger UI
//!
//! # 모듈 구성
//!
//! - [`state`]: 애플리케이션 공유 상태 (AppState)
//! - [`routes`]: REST API 엔드포인트
//! - [`auth`]: 커스텀 토큰 발급
//! - [`error`]: 통합 API 에러 응답
//! - [`openapi`]: OpenAPI 문서 및 Swagger UI

pub mod auth;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;

pub use auth::{JwtTokenIssuer, SheikhClaims};
pub use error::{error_response, ApiErrorResponse, ApiResult};
pub use routes::*;
pub use state::AppState;

#[cfg(any(test, feature = "test-utils"))]
pub use state::create_test_state;
