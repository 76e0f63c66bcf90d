//! OpenAPI 문서화 설정.
//!
//! utoipa로 OpenAPI 3.0 스펙을 생성합니다. Swagger UI는 `/swagger-ui`
//! 경로에서, JSON 스펙은 `/api-docs/openapi.json`에서 제공됩니다.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::ApiErrorResponse;
use crate::routes::{
    ComponentHealth, ComponentStatus, HealthResponse, LoginRequest, LoginResponse,
};

/// Sheikh Platform API 문서.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sheikh Platform API",
        version = "0.1.0",
        description = "Sheikh 인증 API - 자격 증명 검증 및 커스텀 토큰 발급"
    ),
    paths(
        crate::routes::auth::sheikh_login,
        crate::routes::health::health_ready,
    ),
    components(schemas(
        LoginRequest,
        LoginResponse,
        ApiErrorResponse,
        HealthResponse,
        ComponentHealth,
        ComponentStatus,
    )),
    tags(
        (name = "auth", description = "Sheikh 인증"),
        (name = "health", description = "헬스 체크")
    )
)]
pub struct ApiDoc;

/// Swagger UI 라우터 생성.
pub fn swagger_ui_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_spec_valid() {
        let spec = ApiDoc::openapi();
        let json = serde_json::to_string_pretty(&spec).unwrap();

        assert!(json.contains("Sheikh Platform API"));
        assert!(json.contains("/api/v1/auth/sheikh-login"));
        assert!(json.contains("/health/ready"));
    }

    #[test]
    fn test_openapi_contains_schemas() {
        let spec = ApiDoc::openapi();
        let json = serde_json::to_string(&spec).unwrap();

        assert!(json.contains("LoginRequest"));
        assert!(json.contains("LoginResponse"));
        assert!(json.contains("ApiErrorResponse"));
        assert!(json.contains("HealthResponse"));
    }

    #[test]
    fn test_swagger_ui_router_creates() {
        let _router: Router<()> = swagger_ui_router();
    }
}
