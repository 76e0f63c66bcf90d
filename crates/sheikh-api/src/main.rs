//! Sheikh 인증 API 서버.
//!
//! Axum 기반 REST API 서버를 시작합니다. 외부 서비스 핸들(데이터베이스
//! 풀, 토큰 발급자)은 여기서 한 번 생성되어 AppState로 주입됩니다.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use sheikh_api::auth::JwtTokenIssuer;
use sheikh_api::openapi::swagger_ui_router;
use sheikh_api::routes::create_api_router;
use sheikh_api::state::AppState;
use sheikh_core::{init_logging_from_env, AuthConfig, ServerConfig};
use sheikh_store::{Database, DatabaseConfig, UserRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env 파일 로드 (있는 경우)
    let _ = dotenvy::dotenv();

    init_logging_from_env()?;

    let server_config = ServerConfig::from_env();
    let auth_config = AuthConfig::from_env();
    let db_config = DatabaseConfig::from_env();

    let db = Database::connect(&db_config).await?;
    db.migrate().await?;

    let store = Arc::new(UserRepository::new(db.clone()));
    let issuer = Arc::new(JwtTokenIssuer::from_config(&auth_config));

    let state = Arc::new(AppState::new(
        store,
        issuer,
        auth_config.credential_policy(),
        Some(db),
    ));

    let app = create_router(state);

    let addr = server_config.socket_addr()?;
    info!(%addr, "API server listening");
    info!("Swagger UI available at http://{}/swagger-ui", addr);
    info!("OpenAPI spec at http://{}/api-docs/openapi.json", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped gracefully");

    Ok(())
}

/// 전체 라우터 생성.
fn create_router(state: Arc<AppState>) -> Router {
    create_api_router()
        .with_state(state)
        // OpenAPI 문서 및 Swagger UI
        .merge(swagger_ui_router())
        .layer(TraceLayer::new_for_http())
        // 전역 요청 타임아웃 - 개별 단계가 아니라 요청 전체에 적용된다
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(cors_layer())
}

/// CORS 미들웨어 구성.
///
/// `CORS_ORIGINS` 환경변수가 설정되어 있으면 해당 origin만 허용하고,
/// 설정되지 않으면 개발 모드로 간주하여 모든 origin을 허용합니다.
fn cors_layer() -> CorsLayer {
    let allow_origin = match std::env::var("CORS_ORIGINS") {
        Ok(origins) if !origins.is_empty() => {
            let origins: Vec<_> = origins
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();

            if origins.is_empty() {
                warn!("CORS_ORIGINS is set but contains no valid origins, allowing any");
                AllowOrigin::any()
            } else {
                info!("CORS configured with {} allowed origins", origins.len());
                AllowOrigin::list(origins)
            }
        }
        _ => {
            warn!("CORS_ORIGINS not set, allowing any origin (development mode)");
            AllowOrigin::any()
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
        ])
}

/// Graceful shutdown 시그널 대기.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
