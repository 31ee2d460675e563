//! 제시된 토큰 검증
//!
//! - 리프레시 토큰: 저장소 조회 → 폐기 여부 → 만료 여부 순서로 확인
//! - 액세스 토큰: [`ClaimsCodec::verify`]에 위임 (폐기 확인은 파이프라인 단계에서)

use std::sync::Arc;

use mongodb::bson::{oid::ObjectId, DateTime};

use crate::domain::entities::tokens::{token_prefix, RefreshToken};
use crate::domain::models::token::AccessTokenClaims;
use crate::errors::{AppResult, AuthError};
use crate::repositories::tokens::RefreshTokenStore;
use crate::services::auth::ClaimsCodec;

pub struct TokenVerifier {
    codec: ClaimsCodec,
    store: Arc<dyn RefreshTokenStore>,
}

impl TokenVerifier {
    pub fn new(codec: ClaimsCodec, store: Arc<dyn RefreshTokenStore>) -> Self {
        Self { codec, store }
    }

    /// 리프레시 토큰을 검증하고 저장된 레코드와 소유자 ID를 돌려줍니다.
    ///
    /// 폐기된 토큰은 만료 여부와 관계없이 `TokenRevoked`입니다.
    pub async fn verify_refresh_token(&self, token: &str) -> AppResult<(RefreshToken, ObjectId)> {
        let record = self
            .store
            .find_by_value(token)
            .await?
            .ok_or(AuthError::TokenNotFound)?;

        if record.revoked {
            log::warn!("폐기된 리프레시 토큰 사용 시도: {}...", token_prefix(token));
            return Err(AuthError::TokenRevoked.into());
        }

        if record.is_expired_at(DateTime::now()) {
            log::warn!("만료된 리프레시 토큰 사용 시도: {}...", token_prefix(token));
            return Err(AuthError::TokenExpired.into());
        }

        let user_id = record.user_id;
        Ok((record, user_id))
    }

    pub fn verify_access_token(&self, token: &str) -> Result<AccessTokenClaims, AuthError> {
        self.codec.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    use crate::config::AuthConfig;
    use crate::domain::entities::tokens::to_bson_datetime;
    use crate::errors::AppError;
    use crate::repositories::tokens::MemoryRefreshTokenStore;

    fn verifier(store: Arc<MemoryRefreshTokenStore>) -> TokenVerifier {
        TokenVerifier::new(ClaimsCodec::new(&AuthConfig::new("test-secret")), store)
    }

    async fn seed(store: &MemoryRefreshTokenStore, value: &str, offset: Duration) -> ObjectId {
        let user_id = ObjectId::new();
        store
            .create(&user_id, value, to_bson_datetime(Utc::now() + offset))
            .await
            .unwrap();
        user_id
    }

    #[actix_web::test]
    async fn test_valid_refresh_token() {
        let store = Arc::new(MemoryRefreshTokenStore::new());
        let owner = seed(&store, "valid", Duration::days(2)).await;

        let (record, user_id) = verifier(store).verify_refresh_token("valid").await.unwrap();
        assert_eq!(user_id, owner);
        assert_eq!(record.token, "valid");
    }

    #[actix_web::test]
    async fn test_unknown_refresh_token() {
        let store = Arc::new(MemoryRefreshTokenStore::new());
        let err = verifier(store).verify_refresh_token("unknown").await.unwrap_err();
        assert_eq!(err.auth_kind(), Some(&AuthError::TokenNotFound));
    }

    #[actix_web::test]
    async fn test_expired_refresh_token() {
        let store = Arc::new(MemoryRefreshTokenStore::new());
        seed(&store, "old", -Duration::seconds(1)).await;

        let err = verifier(store).verify_refresh_token("old").await.unwrap_err();
        assert_eq!(err.auth_kind(), Some(&AuthError::TokenExpired));
    }

    #[actix_web::test]
    async fn test_revocation_wins_over_expiry() {
        let store = Arc::new(MemoryRefreshTokenStore::new());
        seed(&store, "old", -Duration::seconds(1)).await;
        store.mark_revoked("old").await.unwrap();

        let err = verifier(store).verify_refresh_token("old").await.unwrap_err();
        assert!(matches!(err, AppError::Auth(AuthError::TokenRevoked)));
    }

    #[test]
    fn test_access_token_delegates_to_codec() {
        let verifier = verifier(Arc::new(MemoryRefreshTokenStore::new()));
        assert_eq!(
            verifier.verify_access_token("garbage"),
            Err(AuthError::MalformedToken)
        );
    }
}
