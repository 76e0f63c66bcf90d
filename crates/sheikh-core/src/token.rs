//! Token Issuer seam.
//!
//! 서명된 시간 제한 세션 토큰의 발급을 추상화합니다. 운영 구현은
//! `sheikh-api`의 JWT 발급자입니다.

use uuid::Uuid;

use crate::domain::Role;
use crate::error::AuthResult;

/// 커스텀 토큰 발급자.
pub trait TokenIssuer: Send + Sync {
    /// 주어진 principal에 대해 역할 클레임이 담긴 서명 토큰을 발급합니다.
    ///
    /// 실패는 `Internal`로 분류되며 내부에서 재시도하지 않습니다.
    fn issue(&self, uid: &Uuid, role: Role) -> AuthResult<String>;
}
