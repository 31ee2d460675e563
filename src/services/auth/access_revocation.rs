//! 액세스 토큰 폐기 확인 확장 지점
//!
//! 액세스 토큰은 서명만으로 검증되는 무상태 토큰이라, 리프레시 토큰을 폐기해도
//! 이미 발급된 액세스 토큰은 자연 만료될 때까지 유효합니다.
//! 기본 구현 [`NoopAccessTokenRevocation`]은 이 동작을 그대로 유지하며 항상 "폐기되지 않음"을 반환합니다.
//!
//! 이 틈을 메우려면 `ACCESS_TOKEN_DENYLIST=redis`로 [`RedisAccessTokenDenylist`]를 켭니다.
//! 로그아웃 시 제시된 액세스 토큰의 `jti`가 남은 수명만큼 Redis에 기록됩니다.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::caching::redis::RedisClient;
use crate::domain::models::token::AccessTokenClaims;
use crate::errors::{AppError, AppResult};

const DENYLIST_KEY_PREFIX: &str = "revoked_access";

#[async_trait]
pub trait AccessTokenRevocation: Send + Sync {
    /// 검증을 통과한 토큰이 명시적으로 폐기되었는지 확인합니다.
    async fn is_revoked(&self, claims: &AccessTokenClaims) -> AppResult<bool>;

    /// `jti`를 원래 만료 시각까지 폐기 목록에 올립니다. 멱등적입니다.
    async fn revoke(&self, jti: &str, expires_at: DateTime<Utc>) -> AppResult<()>;
}

/// 폐기 확인을 하지 않는 기본 구현
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAccessTokenRevocation;

#[async_trait]
impl AccessTokenRevocation for NoopAccessTokenRevocation {
    async fn is_revoked(&self, _claims: &AccessTokenClaims) -> AppResult<bool> {
        Ok(false)
    }

    async fn revoke(&self, _jti: &str, _expires_at: DateTime<Utc>) -> AppResult<()> {
        Ok(())
    }
}

/// Redis 기반 액세스 토큰 폐기 목록
///
/// 키: `revoked_access:{jti}`, TTL: 토큰의 남은 수명 (초)
#[derive(Clone)]
pub struct RedisAccessTokenDenylist {
    redis: RedisClient,
}

impl RedisAccessTokenDenylist {
    pub fn new(redis: RedisClient) -> Self {
        Self { redis }
    }

    fn key(jti: &str) -> String {
        format!("{}:{}", DENYLIST_KEY_PREFIX, jti)
    }
}

#[async_trait]
impl AccessTokenRevocation for RedisAccessTokenDenylist {
    async fn is_revoked(&self, claims: &AccessTokenClaims) -> AppResult<bool> {
        self.redis
            .exists(&Self::key(&claims.jti))
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }

    async fn revoke(&self, jti: &str, expires_at: DateTime<Utc>) -> AppResult<()> {
        let remaining = (expires_at - Utc::now()).num_seconds();
        if remaining <= 0 {
            return Ok(());
        }

        self.redis
            .set_with_expiry(&Self::key(jti), &expires_at.timestamp(), remaining as u64)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }
}

/// 프로세스 내 폐기 목록
///
/// Redis 없이 폐기 동작을 확인할 때 사용합니다. 만료된 항목은 조회 시 무시됩니다.
#[derive(Debug, Default)]
pub struct MemoryAccessTokenDenylist {
    revoked: RwLock<HashMap<String, DateTime<Utc>>>,
}

impl MemoryAccessTokenDenylist {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccessTokenRevocation for MemoryAccessTokenDenylist {
    async fn is_revoked(&self, claims: &AccessTokenClaims) -> AppResult<bool> {
        let revoked = self
            .revoked
            .read()
            .map_err(|_| AppError::InternalError("denylist lock poisoned".to_string()))?;

        Ok(revoked
            .get(&claims.jti)
            .is_some_and(|expires_at| *expires_at > Utc::now()))
    }

    async fn revoke(&self, jti: &str, expires_at: DateTime<Utc>) -> AppResult<()> {
        self.revoked
            .write()
            .map_err(|_| AppError::InternalError("denylist lock poisoned".to_string()))?
            .insert(jti.to_string(), expires_at);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    use crate::domain::entities::users::Role;

    fn claims(jti: &str) -> AccessTokenClaims {
        let now = Utc::now();
        AccessTokenClaims {
            sub: "u".to_string(),
            exp: (now + Duration::hours(1)).timestamp(),
            iat: now.timestamp(),
            iss: "WellBiteAPI".to_string(),
            aud: vec!["com.cxcarvaj.WellBite".to_string()],
            jti: jti.to_string(),
            user_id: "u".to_string(),
            email: "ana@example.com".to_string(),
            role: Role::Client,
        }
    }

    #[actix_web::test]
    async fn test_noop_never_reports_revoked() {
        let noop = NoopAccessTokenRevocation;
        noop.revoke("jti-1", Utc::now() + Duration::hours(1)).await.unwrap();
        assert!(!noop.is_revoked(&claims("jti-1")).await.unwrap());
    }

    #[actix_web::test]
    async fn test_memory_denylist() {
        let denylist = MemoryAccessTokenDenylist::new();
        denylist.revoke("jti-1", Utc::now() + Duration::hours(1)).await.unwrap();
        denylist.revoke("jti-old", Utc::now() - Duration::hours(1)).await.unwrap();

        assert!(denylist.is_revoked(&claims("jti-1")).await.unwrap());
        assert!(!denylist.is_revoked(&claims("jti-2")).await.unwrap());
        assert!(!denylist.is_revoked(&claims("jti-old")).await.unwrap());
    }

    #[test]
    fn test_redis_key_format() {
        assert_eq!(RedisAccessTokenDenylist::key("abc"), "revoked_access:abc");
    }
}
