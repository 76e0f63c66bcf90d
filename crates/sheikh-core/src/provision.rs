//! Sheikh 계정 프로비저닝.
//!
//! 오프라인 운영 작업입니다. principal 식별자를 만들고, 비밀번호 해시를
//! 계산한 뒤, 레코드를 한 번 기록합니다. 멱등하지 않으며 중복
//! `unique_id`를 거부하지 않습니다.

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{NewUserRecord, Role};
use crate::error::{AuthError, AuthResult};
use crate::password;
use crate::store::UserStore;

/// 프로비저닝 입력.
#[derive(Debug, Clone)]
pub struct ProvisionRequest {
    pub unique_id: String,
    pub display_name: String,
    pub password: String,
}

/// 프로비저닝 결과. 운영자 출력에 쓰입니다.
#[derive(Debug, Clone)]
pub struct ProvisionedAccount {
    pub uid: Uuid,
    pub unique_id: String,
    /// 운영자 확인용 평문 비밀번호 (데모 전용)
    pub password: String,
}

/// 새 sheikh 계정을 만듭니다.
///
/// 해시와 함께 평문 비밀번호도 레코드에 저장됩니다. 로컬 데모 편의를 위한
/// 알려진 보안 결함이며, 소비 측은 [`CredentialPolicy`] 플래그로 평문
/// 경로를 차단할 수 있습니다.
///
/// [`CredentialPolicy`]: crate::credential::CredentialPolicy
pub async fn provision(
    store: &dyn UserStore,
    request: ProvisionRequest,
) -> AuthResult<ProvisionedAccount> {
    if request.unique_id.is_empty() || request.display_name.is_empty() || request.password.is_empty()
    {
        return Err(AuthError::InvalidArgument(
            "uniqueId, display name and password are all required".to_string(),
        ));
    }

    // 중복은 막지 않는다. 로그인 조회의 단일 매치 가정이 깨지는 지점이므로
    // 경고만 남기고 진행한다.
    let existing = store.count_sheikhs_by_unique_id(&request.unique_id).await?;
    if existing > 0 {
        warn!(
            unique_id = %request.unique_id,
            existing,
            "provisioning a duplicate unique_id"
        );
    }

    let password_hash = password::hash_password(&request.password)?;

    // 외부 identity 서비스의 principal 생성 단계. 여기서 만든 uid가
    // 레코드 키이자 토큰 subject가 된다.
    let uid = Uuid::new_v4();

    let record = store
        .create_user(&NewUserRecord {
            uid,
            unique_id: request.unique_id.clone(),
            display_name: request.display_name.clone(),
            role: Role::Sheikh,
            password_hash: Some(password_hash),
            password: Some(request.password.clone()),
        })
        .await?;

    info!(uid = %record.uid, unique_id = %record.unique_id, "sheikh account provisioned");

    Ok(ProvisionedAccount {
        uid: record.uid,
        unique_id: record.unique_id,
        password: request.password,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::{Credential, CredentialPolicy};
    use crate::login::authenticate;
    use crate::testing::{MemoryUserStore, StaticTokenIssuer};

    fn request(unique_id: &str, display_name: &str, password: &str) -> ProvisionRequest {
        ProvisionRequest {
            unique_id: unique_id.to_string(),
            display_name: display_name.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_provision_writes_hash_and_plaintext() {
        let store = MemoryUserStore::new();

        let account = provision(&store, request("sheikh002", "الشيخ عبد الله", "pw"))
            .await
            .unwrap();
        assert_eq!(account.unique_id, "sheikh002");
        assert_eq!(account.password, "pw");

        let records = store.records();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.uid, account.uid);
        assert_eq!(record.role, Role::Sheikh);
        // 해시가 우선 자격 증명으로 해석되고, 평문도 병행 저장된다
        assert!(matches!(record.credential(), Credential::Hashed(_)));
        assert_eq!(record.password.as_deref(), Some("pw"));
    }

    #[tokio::test]
    async fn test_missing_argument_is_invalid() {
        let store = MemoryUserStore::new();

        for req in [
            request("", "Name", "pw"),
            request("sheikh002", "", "pw"),
            request("sheikh002", "Name", ""),
        ] {
            let err = provision(&store, req).await.unwrap_err();
            assert!(matches!(err, AuthError::InvalidArgument(_)));
        }
        assert!(store.records().is_empty());
    }

    #[tokio::test]
    async fn test_provision_then_authenticate() {
        let store = MemoryUserStore::new();

        let account = provision(&store, request("sheikh002", "Name", "pw"))
            .await
            .unwrap();

        let outcome = authenticate(
            &store,
            &StaticTokenIssuer,
            &CredentialPolicy::default(),
            "sheikh002",
            "pw",
        )
        .await
        .unwrap();

        assert_eq!(outcome.uid, account.uid);
    }

    #[tokio::test]
    async fn test_duplicate_provisioning_creates_two_principals() {
        // 현재 동작의 고정: 같은 unique_id로 두 번 실행하면 서로 다른
        // principal 두 개가 생긴다 (중복 제거 없음)
        let store = MemoryUserStore::new();

        let first = provision(&store, request("sheikh002", "Name", "pw")).await.unwrap();
        let second = provision(&store, request("sheikh002", "Name", "pw")).await.unwrap();

        assert_ne!(first.uid, second.uid);
        assert_eq!(store.records().len(), 2);
    }
}
