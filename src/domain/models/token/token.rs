//! 액세스 토큰 클레임과 발급된 토큰 쌍
//!
//! RFC 7519 JWT 표준 클레임과 애플리케이션 특화 클레임을 함께 담습니다.
//! 클레임은 저장되지 않으며, 서명된 이후에는 변경되지 않습니다.
use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::entities::tokens::RefreshToken;
use crate::domain::entities::users::Role;
use crate::errors::AuthError;

/// 액세스 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (사용자 ID 문자열)
/// - `exp`: 만료 시간 (Unix timestamp, 항상 `iat` + 액세스 토큰 유효 기간)
/// - `iat`: 발급 시간 (Unix timestamp)
/// - `iss`: 발급자 (이 서비스)
/// - `aud`: 대상 (클라이언트 애플리케이션)
/// - `jti`: 토큰별 고유 식별자 (추적용)
/// - `user_id`, `email`, `role`: 하위 핸들러의 무상태 권한 판단용 사본
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
    pub iss: String,
    pub aud: Vec<String>,
    pub jti: String,
    pub user_id: String,
    pub email: String,
    pub role: Role,
}

impl AccessTokenClaims {
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_default()
    }

    /// 클레임에 담긴 사용자 ID를 ObjectId로 해석합니다.
    ///
    /// 서명이 유효한데 ID가 해석되지 않는다면 우리가 발급한 토큰이 아니므로
    /// `MalformedToken`으로 취급합니다.
    pub fn user_object_id(&self) -> Result<ObjectId, AuthError> {
        ObjectId::parse_str(&self.user_id).map_err(|_| AuthError::MalformedToken)
    }
}

/// 로그인 시 발급되는 토큰 쌍
///
/// 액세스 토큰은 아직 서명되지 않은 클레임 형태이며,
/// 리프레시 토큰은 이미 저장소에 기록된 레코드입니다.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub claims: AccessTokenClaims,
    pub refresh_token: RefreshToken,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(user_id: &str, exp: i64) -> AccessTokenClaims {
        AccessTokenClaims {
            sub: user_id.to_string(),
            exp,
            iat: exp - 3600,
            iss: "WellBiteAPI".to_string(),
            aud: vec!["com.cxcarvaj.WellBite".to_string()],
            jti: "jti".to_string(),
            user_id: user_id.to_string(),
            email: "ana@example.com".to_string(),
            role: Role::Client,
        }
    }

    #[test]
    fn test_user_object_id() {
        let id = ObjectId::new();
        assert_eq!(claims(&id.to_hex(), 0).user_object_id().unwrap(), id);
        assert_eq!(claims("not-an-id", 0).user_object_id(), Err(AuthError::MalformedToken));
    }

    #[test]
    fn test_claims_json_shape() {
        let value = serde_json::to_value(claims("abc", 100)).unwrap();
        assert_eq!(value["aud"], serde_json::json!(["com.cxcarvaj.WellBite"]));
        assert_eq!(value["role"], "client");
        assert_eq!(value["exp"], 100);
    }
}
