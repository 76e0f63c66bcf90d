//! 통합 API 에러 응답 타입.
//!
//! 모든 엔드포인트가 같은 `{code, message}` 형식으로 실패를 보고합니다.
//! 도메인 에러는 종류 태그만으로 상태 코드에 매핑되며, 메시지는 감지
//! 지점에서 만들어진 그대로 전달됩니다 (재포장 없음).

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use sheikh_core::AuthError;

/// 통합 API 에러 응답.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// 에러 코드 (예: "INVALID_ARGUMENT", "NOT_FOUND")
    pub code: String,
    /// 사용자에게 보여줄 메시지 (로그인 흐름은 아랍어)
    pub message: String,
}

impl ApiErrorResponse {
    /// 기본 에러 생성.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ApiErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiErrorResponse {}

/// API 핸들러 Result 타입 별칭.
pub type ApiResult<T> = Result<T, (StatusCode, Json<ApiErrorResponse>)>;

/// 도메인 에러를 HTTP 응답 쌍으로 변환합니다.
pub fn error_response(err: &AuthError) -> (StatusCode, Json<ApiErrorResponse>) {
    let status = match err {
        AuthError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        AuthError::NotFound(_) => StatusCode::NOT_FOUND,
        AuthError::PermissionDenied(_) => StatusCode::FORBIDDEN,
        AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(ApiErrorResponse::new(err.code(), err.to_string())))
}
