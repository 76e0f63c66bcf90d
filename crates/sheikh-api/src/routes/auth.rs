//! Sheikh 로그인 API.
//!
//! 원본 서비스의 원격 호출 인터페이스와 같은 camelCase 와이어 형식을
//! 사용합니다: `{uniqueId, password}` → `{token, uid}`.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{error_response, ApiErrorResponse, ApiResult};
use crate::state::AppState;

/// 로그인 요청.
///
/// 누락된 필드는 빈 문자열로 취급되어 입력 검증에서 거부됩니다.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// 사람이 고른 로그인 식별자
    #[serde(default)]
    pub unique_id: String,
    /// 비밀번호
    #[serde(default)]
    pub password: String,
}

/// 로그인 응답.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    /// 서명된 커스텀 토큰
    pub token: String,
    /// 인증된 principal의 내부 식별자
    pub uid: Uuid,
}

/// Sheikh 로그인.
///
/// POST /api/v1/auth/sheikh-login
#[utoipa::path(
    post,
    path = "/api/v1/auth/sheikh-login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "로그인 성공", body = LoginResponse),
        (status = 400, description = "입력 누락", body = ApiErrorResponse),
        (status = 403, description = "비밀번호 불일치", body = ApiErrorResponse),
        (status = 404, description = "계정 없음", body = ApiErrorResponse),
        (status = 500, description = "서버 오류", body = ApiErrorResponse)
    ),
    tag = "auth"
)]
pub async fn sheikh_login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    debug!(unique_id = %request.unique_id, "sheikh login requested");

    let outcome = sheikh_core::authenticate(
        state.store.as_ref(),
        state.token_issuer.as_ref(),
        &state.credential_policy,
        &request.unique_id,
        &request.password,
    )
    .await
    .map_err(|e| error_response(&e))?;

    Ok(Json(LoginResponse {
        token: outcome.token,
        uid: outcome.uid,
    }))
}

/// 인증 라우터 생성.
pub fn auth_router() -> Router<Arc<AppState>> {
    Router::new().route("/sheikh-login", post(sheikh_login))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::create_test_state;
    use axum::http::StatusCode;
    use sheikh_core::testing::sheikh_record;

    fn login(unique_id: &str, password: &str) -> LoginRequest {
        LoginRequest {
            unique_id: unique_id.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_demo_record_logs_in() {
        let record = sheikh_record("sheikh001", None, Some("demo123"));
        let uid = record.uid;
        let state = create_test_state(vec![record]);

        let Json(response) = sheikh_login(State(state), Json(login("sheikh001", "demo123")))
            .await
            .unwrap();

        assert!(!response.token.is_empty());
        assert_eq!(response.uid, uid);
    }

    #[tokio::test]
    async fn test_missing_fields_are_bad_request() {
        let state = create_test_state(vec![]);

        for request in [login("", "demo123"), login("sheikh001", ""), login("", "")] {
            let (status, body) = sheikh_login(State(state.clone()), Json(request))
                .await
                .unwrap_err();
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body.0.code, "INVALID_ARGUMENT");
        }
    }

    #[tokio::test]
    async fn test_unknown_account_is_not_found() {
        let state = create_test_state(vec![]);

        let (status, body) = sheikh_login(State(state), Json(login("sheikh001", "demo123")))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.0.code, "NOT_FOUND");
        // 사용자 노출 메시지는 아랍어 원문 그대로
        assert_eq!(body.0.message, sheikh_core::messages::SHEIKH_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_wrong_password_is_forbidden() {
        let state = create_test_state(vec![sheikh_record("sheikh001", None, Some("demo123"))]);

        let (status, body) = sheikh_login(State(state), Json(login("sheikh001", "wrong")))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body.0.code, "PERMISSION_DENIED");
    }

    #[tokio::test]
    async fn test_issued_token_carries_the_uid() {
        use crate::auth::JwtTokenIssuer;

        let record = sheikh_record("sheikh001", None, Some("demo123"));
        let uid = record.uid;
        let state = create_test_state(vec![record]);

        let Json(response) = sheikh_login(State(state), Json(login("sheikh001", "demo123")))
            .await
            .unwrap();

        // 테스트 상태와 같은 키로 디코딩하면 subject가 uid와 일치한다
        let issuer = JwtTokenIssuer::new("test-secret-key-for-jwt-testing-minimum-32-chars", 60);
        let claims = issuer.decode(&response.token).unwrap();
        assert_eq!(claims.sub, uid.to_string());
    }
}
