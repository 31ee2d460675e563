use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::{Role, User};
use crate::errors::AuthError;

/// 사용자 응답 DTO
///
/// 비밀번호 해시와 타임스탬프는 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: Role,
}

impl TryFrom<&User> for UserResponse {
    type Error = AuthError;

    fn try_from(user: &User) -> Result<Self, Self::Error> {
        let id = user.id.ok_or(AuthError::IdentityMissing)?;

        Ok(Self {
            id: id.to_hex(),
            email: user.email.clone(),
            full_name: user.full_name(),
            role: user.role,
        })
    }
}

/// 로그인 응답 DTO
///
/// `expires_at`은 액세스 토큰의 만료 시각입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
}

/// 토큰 갱신 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}
