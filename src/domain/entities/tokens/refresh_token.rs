//! Refresh Token Entity
//!
//! `refresh_tokens` 컬렉션에 저장되는 리프레시 토큰 레코드입니다.
//!
//! ## 불변 조건
//!
//! - `token` 값은 전체 컬렉션에서 유일합니다 (유니크 인덱스).
//! - `expires_at`은 발급 시점 + 리프레시 토큰 유효 기간으로 한 번만 설정됩니다.
//! - `revoked`가 한 번 `true`가 되면 다시 `false`로 돌아가지 않습니다.
//! - 토큰은 `revoked == false && expires_at > now` 일 때만 사용 가능합니다.
//!
//! 이 레코드는 저장소 전용이며 클라이언트 응답으로 직접 직렬화하지 않습니다.

use chrono::Utc;
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshToken {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    pub token: String,
    pub expires_at: DateTime,
    #[serde(default)]
    pub revoked: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl RefreshToken {
    /// 폐기되지 않은 새 레코드를 생성합니다.
    pub fn new(user_id: ObjectId, token: String, expires_at: DateTime) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            user_id,
            token,
            expires_at,
            revoked: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_expired_at(&self, now: DateTime) -> bool {
        self.expires_at <= now
    }

    pub fn is_valid_at(&self, now: DateTime) -> bool {
        !self.revoked && !self.is_expired_at(now)
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid_at(DateTime::now())
    }
}

/// 로그용 토큰 접두사 (최대 8자)
pub fn token_prefix(token: &str) -> &str {
    let end = token
        .char_indices()
        .nth(8)
        .map(|(idx, _)| idx)
        .unwrap_or(token.len());
    &token[..end]
}

pub fn to_bson_datetime(value: chrono::DateTime<Utc>) -> DateTime {
    DateTime::from_millis(value.timestamp_millis())
}

pub fn to_chrono_datetime(value: DateTime) -> chrono::DateTime<Utc> {
    chrono::DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}
