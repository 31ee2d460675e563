use std::sync::Arc;

use crate::domain::entities::tokens::token_prefix;
use crate::errors::{AppError, AppResult, AuthError};
use crate::repositories::tokens::RefreshTokenStore;

/// 리프레시 토큰 폐기 서비스
pub struct RevocationService {
    store: Arc<dyn RefreshTokenStore>,
}

impl RevocationService {
    pub fn new(store: Arc<dyn RefreshTokenStore>) -> Self {
        Self { store }
    }

    /// 리프레시 토큰을 폐기합니다. 이미 폐기된 토큰에 대해서도 성공합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::TokenNotFound` - 존재하지 않는 토큰 값
    pub async fn revoke(&self, token: &str) -> AppResult<()> {
        match self.store.mark_revoked(token).await {
            Ok(()) => {
                log::info!("🔒 리프레시 토큰 폐기: {}...", token_prefix(token));
                Ok(())
            }
            Err(AppError::NotFound(_)) => Err(AuthError::TokenNotFound.into()),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use mongodb::bson::oid::ObjectId;

    use crate::config::AuthConfig;
    use crate::domain::entities::tokens::to_bson_datetime;
    use crate::repositories::tokens::MemoryRefreshTokenStore;
    use crate::services::auth::{ClaimsCodec, TokenVerifier};

    #[actix_web::test]
    async fn test_revoke_twice_succeeds() {
        let store = Arc::new(MemoryRefreshTokenStore::new());
        store
            .create(&ObjectId::new(), "value", to_bson_datetime(Utc::now() + Duration::days(2)))
            .await
            .unwrap();
        let service = RevocationService::new(store.clone());

        service.revoke("value").await.unwrap();
        service.revoke("value").await.unwrap();

        let verifier = TokenVerifier::new(ClaimsCodec::new(&AuthConfig::new("s")), store);
        let err = verifier.verify_refresh_token("value").await.unwrap_err();
        assert_eq!(err.auth_kind(), Some(&AuthError::TokenRevoked));
    }

    #[actix_web::test]
    async fn test_revoke_unknown_token() {
        let service = RevocationService::new(Arc::new(MemoryRefreshTokenStore::new()));
        let err = service.revoke("missing").await.unwrap_err();
        assert_eq!(err.auth_kind(), Some(&AuthError::TokenNotFound));
    }
}
