//! Sheikh 로그인 흐름.
//!
//! 조회 → 검증 → 토큰 발급의 단일 선형 흐름입니다. 상태 기계나 내부
//! 동시성 없이, 주입된 저장소/발급자 핸들로 요청당 한 번 실행됩니다.

use tracing::info;
use uuid::Uuid;

use crate::credential::CredentialPolicy;
use crate::domain::Role;
use crate::error::{messages, AuthError, AuthResult};
use crate::store::UserStore;
use crate::token::TokenIssuer;

/// 로그인 성공 결과.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// 서명된 세션 토큰
    pub token: String,
    /// 인증된 principal의 내부 식별자
    pub uid: Uuid,
}

/// `unique_id` + `password`로 sheikh를 인증하고 세션 토큰을 발급합니다.
///
/// # Errors
///
/// - `InvalidArgument`: 식별자 또는 비밀번호가 비어 있음. 저장소 접근 전에
///   반환됩니다.
/// - `NotFound`: 일치하는 sheikh 레코드 없음. 역할 불일치와 구분하지 않음.
/// - `PermissionDenied`: 자격 증명 불일치.
/// - `Internal`: 저장소/발급자 실패. 내부에서 재시도하지 않습니다.
pub async fn authenticate(
    store: &dyn UserStore,
    issuer: &dyn TokenIssuer,
    policy: &CredentialPolicy,
    unique_id: &str,
    password: &str,
) -> AuthResult<LoginOutcome> {
    if unique_id.is_empty() || password.is_empty() {
        return Err(AuthError::InvalidArgument(
            messages::MISSING_CREDENTIALS.to_string(),
        ));
    }

    // 조회에만 트림을 적용한다. 저장된 값 내부의 공백은 그대로 비교됨.
    let lookup_id = unique_id.trim();

    let record = store
        .find_sheikh_by_unique_id(lookup_id)
        .await?
        .ok_or_else(|| AuthError::NotFound(messages::SHEIKH_NOT_FOUND.to_string()))?;

    if !record.credential().verify(password, policy) {
        return Err(AuthError::PermissionDenied(
            messages::WRONG_PASSWORD.to_string(),
        ));
    }

    let token = issuer.issue(&record.uid, Role::Sheikh)?;
    info!(uid = %record.uid, "sheikh login succeeded");

    Ok(LoginOutcome {
        token,
        uid: record.uid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::hash_password;
    use crate::testing::{sheikh_record, FailingTokenIssuer, MemoryUserStore, StaticTokenIssuer};

    fn policy() -> CredentialPolicy {
        CredentialPolicy::default()
    }

    #[tokio::test]
    async fn test_hashed_record_authenticates_on_match() {
        let hash = hash_password("demo123").unwrap();
        let record = sheikh_record("sheikh001", Some(&hash), None);
        let uid = record.uid;
        let store = MemoryUserStore::with_records(vec![record]);

        let outcome = authenticate(&store, &StaticTokenIssuer, &policy(), "sheikh001", "demo123")
            .await
            .unwrap();

        assert_eq!(outcome.uid, uid);
        assert!(!outcome.token.is_empty());
    }

    #[tokio::test]
    async fn test_hashed_record_rejects_wrong_password() {
        let hash = hash_password("demo123").unwrap();
        let store = MemoryUserStore::with_records(vec![sheikh_record("sheikh001", Some(&hash), None)]);

        for wrong in ["demo124", "DEMO123", "x"] {
            let err = authenticate(&store, &StaticTokenIssuer, &policy(), "sheikh001", wrong)
                .await
                .unwrap_err();
            assert!(matches!(err, AuthError::PermissionDenied(_)), "password {:?}", wrong);
        }
    }

    #[tokio::test]
    async fn test_plaintext_record_requires_exact_match() {
        let record = sheikh_record("sheikh001", None, Some("demo123"));
        let uid = record.uid;
        let store = MemoryUserStore::with_records(vec![record]);

        // 스펙의 데모 시나리오: sheikh001 / demo123
        let outcome = authenticate(&store, &StaticTokenIssuer, &policy(), "sheikh001", "demo123")
            .await
            .unwrap();
        assert_eq!(outcome.uid, uid);
        assert!(!outcome.token.is_empty());

        let err = authenticate(&store, &StaticTokenIssuer, &policy(), "sheikh001", "Demo123")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::PermissionDenied(_)));
    }

    #[tokio::test]
    async fn test_record_without_credentials_never_authenticates() {
        let store = MemoryUserStore::with_records(vec![sheikh_record("sheikh001", None, None)]);

        for password in ["demo123", "", " "] {
            // 빈 비밀번호는 입력 검증에서, 나머지는 검증 단계에서 거부된다
            let err = authenticate(&store, &StaticTokenIssuer, &policy(), "sheikh001", password)
                .await
                .unwrap_err();
            if password.is_empty() {
                assert!(matches!(err, AuthError::InvalidArgument(_)));
            } else {
                assert!(matches!(err, AuthError::PermissionDenied(_)));
            }
        }
    }

    #[tokio::test]
    async fn test_empty_input_fails_before_any_store_query() {
        let store = MemoryUserStore::new();

        let err = authenticate(&store, &StaticTokenIssuer, &policy(), "", "demo123")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidArgument(_)));

        let err = authenticate(&store, &StaticTokenIssuer, &policy(), "sheikh001", "")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidArgument(_)));

        assert_eq!(store.query_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_unique_id_is_not_found() {
        let store = MemoryUserStore::with_records(vec![sheikh_record("sheikh001", None, Some("demo123"))]);

        let err = authenticate(&store, &StaticTokenIssuer, &policy(), "sheikh999", "demo123")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_supplied_unique_id_is_trimmed() {
        let record = sheikh_record("sheikh001", None, Some("demo123"));
        let uid = record.uid;
        let store = MemoryUserStore::with_records(vec![record]);

        let outcome = authenticate(
            &store,
            &StaticTokenIssuer,
            &policy(),
            "  sheikh001  ",
            "demo123",
        )
        .await
        .unwrap();
        assert_eq!(outcome.uid, uid);
    }

    #[tokio::test]
    async fn test_embedded_whitespace_survives_trimming() {
        // 내부 공백이 있는 저장 식별자는 주변 공백만 다른 입력과 일치해야 한다
        let record = sheikh_record("sheikh 001", None, Some("demo123"));
        let uid = record.uid;
        let store = MemoryUserStore::with_records(vec![record]);

        let outcome = authenticate(&store, &StaticTokenIssuer, &policy(), " sheikh 001 ", "demo123")
            .await
            .unwrap();
        assert_eq!(outcome.uid, uid);
    }

    #[tokio::test]
    async fn test_password_is_not_trimmed() {
        let store = MemoryUserStore::with_records(vec![sheikh_record("sheikh001", None, Some("demo123"))]);

        let err = authenticate(&store, &StaticTokenIssuer, &policy(), "sheikh001", " demo123 ")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::PermissionDenied(_)));
    }

    #[tokio::test]
    async fn test_issuer_failure_surfaces_as_internal() {
        let store = MemoryUserStore::with_records(vec![sheikh_record("sheikh001", None, Some("demo123"))]);

        let err = authenticate(&store, &FailingTokenIssuer, &policy(), "sheikh001", "demo123")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Internal(_)));
    }

    #[tokio::test]
    async fn test_plaintext_policy_disables_demo_records() {
        let store = MemoryUserStore::with_records(vec![sheikh_record("sheikh001", None, Some("demo123"))]);
        let hardened = CredentialPolicy { allow_plaintext: false };

        let err = authenticate(&store, &StaticTokenIssuer, &hardened, "sheikh001", "demo123")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::PermissionDenied(_)));
    }
}
