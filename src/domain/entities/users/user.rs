//! User Entity Implementation
//!
//! 인증 서브시스템이 참조하는 사용자 엔티티입니다.
//! 사용자 프로필의 생성과 수정은 이 서비스의 범위 밖이며, 여기서는 값으로만 읽습니다.

use std::fmt;

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 역할
///
/// `none`은 아직 프로비저닝되지 않은 계정을 나타내는 센티널 값입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Professional,
    Client,
    #[serde(rename = "none")]
    Unassigned,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Professional => "professional",
            Role::Client => "client",
            Role::Unassigned => "none",
        }
    }

    /// 토큰 갱신/로그아웃 등 보호된 기능을 사용할 수 있는 역할인지 확인
    pub fn is_provisioned(&self) -> bool {
        !matches!(self, Role::Unassigned)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 아직 저장되지 않은 (ID가 없는) 사용자를 생성합니다.
    pub fn new(
        email: String,
        password_hash: String,
        first_name: String,
        last_name: String,
        role: Role,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            password_hash,
            first_name,
            last_name,
            role,
            avatar: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::Client).unwrap(), "\"client\"");
        assert_eq!(serde_json::to_string(&Role::Unassigned).unwrap(), "\"none\"");

        let role: Role = serde_json::from_str("\"professional\"").unwrap();
        assert_eq!(role, Role::Professional);
        let role: Role = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(role, Role::Unassigned);
    }

    #[test]
    fn test_only_none_role_is_unprovisioned() {
        assert!(Role::Admin.is_provisioned());
        assert!(Role::Professional.is_provisioned());
        assert!(Role::Client.is_provisioned());
        assert!(!Role::Unassigned.is_provisioned());
    }

    #[test]
    fn test_new_user_has_no_id() {
        let user = User::new(
            "ana@example.com".to_string(),
            "hash".to_string(),
            "Ana".to_string(),
            "García".to_string(),
            Role::Client,
        );

        assert!(user.id_string().is_none());
        assert_eq!(user.full_name(), "Ana García");
    }
}
