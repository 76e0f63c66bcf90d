//! 사용자(principal) 레코드.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::credential::Credential;

/// 사용자 역할.
///
/// 레코드가 어떤 로그인 흐름에서 쓰일 수 있는지 제한하는 태그입니다.
/// 현재 인증 게이트웨이는 sheikh 역할만 처리합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// 강의자 계정
    Sheikh,
}

impl Role {
    /// 저장소/토큰 클레임에 쓰이는 문자열 표현.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Sheikh => "sheikh",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sheikh" => Ok(Role::Sheikh),
            _ => Err(format!("unknown role: {}", s)),
        }
    }
}

/// 저장된 사용자 레코드.
///
/// 프로비저닝 시 한 번 생성되고 이후 갱신되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// 내부 식별자. 저장소 키이자 토큰 subject. 불변.
    pub uid: Uuid,
    /// 사람이 고른 로그인 식별자. 대소문자 구분.
    pub unique_id: String,
    /// 표시 이름. 인증 로직에 쓰이지 않음.
    pub display_name: String,
    /// 역할 태그
    pub role: Role,
    /// bcrypt 해시. 존재하면 항상 우선.
    pub password_hash: Option<String>,
    /// 평문 비밀번호. 해시가 없을 때만 쓰이는 데모 전용 경로.
    pub password: Option<String>,
    /// 저장소가 부여한 생성 시각. 이후 변경 없음.
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// 레코드 적재 시점에 자격 증명 종류를 한 번 해석합니다.
    ///
    /// 이후 검증 로직은 필드 존재 여부를 다시 보지 않습니다.
    pub fn credential(&self) -> Credential {
        Credential::resolve(self.password_hash.as_deref(), self.password.as_deref())
    }
}

/// 프로비저닝이 기록하는 새 레코드.
///
/// `created_at`은 저장소가 기록 시점에 부여하므로 여기에 없습니다.
#[derive(Debug, Clone)]
pub struct NewUserRecord {
    pub uid: Uuid,
    pub unique_id: String,
    pub display_name: String,
    pub role: Role,
    pub password_hash: Option<String>,
    pub password: Option<String>,
}
