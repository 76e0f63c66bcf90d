//! bcrypt 기반 비밀번호 해싱.
//!
//! 작업 계수는 기존 시스템이 기록한 해시와 호환되도록 10으로 고정합니다.

use tracing::{error, warn};

use crate::error::{AuthError, AuthResult};

/// bcrypt 작업 계수.
pub const BCRYPT_COST: u32 = 10;

/// 비밀번호를 bcrypt로 해싱합니다. 솔트는 자동 생성됩니다.
pub fn hash_password(password: &str) -> AuthResult<String> {
    bcrypt::hash(password, BCRYPT_COST).map_err(|e| {
        error!("bcrypt hashing failed: {}", e);
        AuthError::Internal(format!("password hashing failed: {}", e))
    })
}

/// 평문 비밀번호를 저장된 bcrypt 해시와 비교합니다.
///
/// 비교 자체는 bcrypt 내부의 고정 시간 비교를 사용합니다. 저장된 해시가
/// 손상된 경우는 별도 에러로 구분하지 않고 검증 실패로 취급합니다.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match bcrypt::verify(password, hash) {
        Ok(matched) => matched,
        Err(e) => {
            warn!("stored password hash is malformed: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("demo123").unwrap();

        assert!(verify_password("demo123", &hash));
        assert!(!verify_password("demo124", &hash));
        assert!(!verify_password("", &hash));
    }

    #[test]
    fn test_same_password_different_salts() {
        let hash1 = hash_password("demo123").unwrap();
        let hash2 = hash_password("demo123").unwrap();

        // 솔트가 달라 해시는 다르지만 둘 다 검증 가능
        assert_ne!(hash1, hash2);
        assert!(verify_password("demo123", &hash1));
        assert!(verify_password("demo123", &hash2));
    }

    #[test]
    fn test_malformed_hash_fails_verification() {
        assert!(!verify_password("demo123", "not-a-bcrypt-hash"));
    }

    #[test]
    fn test_unicode_password() {
        let hash = hash_password("كلمة السر ٨٧٦").unwrap();
        assert!(verify_password("كلمة السر ٨٧٦", &hash));
    }
}
