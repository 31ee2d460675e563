//! 액세스 토큰 클레임과 리프레시 토큰 레코드 발급

use std::sync::Arc;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::Utc;
use rand::RngCore;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::domain::entities::tokens::{to_bson_datetime, token_prefix};
use crate::domain::entities::users::User;
use crate::domain::models::token::{AccessTokenClaims, TokenPair};
use crate::errors::{AppError, AppResult, AuthError};
use crate::repositories::tokens::RefreshTokenStore;

/// 리프레시 토큰 값 충돌 시 최대 시도 횟수
const MAX_ISSUE_ATTEMPTS: usize = 3;

/// 리프레시 토큰 원시 바이트 수
const REFRESH_TOKEN_BYTES: usize = 32;

pub type RefreshValueGenerator = Box<dyn Fn() -> String + Send + Sync>;

/// 32바이트 난수를 URL-safe base64(패딩 없음)로 인코딩한 리프레시 토큰 값
///
/// 로그아웃은 이 값을 쿼리 문자열로 받으므로 `+`, `/`, `=`가 들어가면 안 됩니다.
pub fn random_refresh_value() -> String {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// 토큰 발급기
///
/// 액세스 토큰 유효 기간과 리프레시 토큰 유효 기간은 [`AuthConfig`]의 독립된 값입니다.
pub struct TokenIssuer {
    config: AuthConfig,
    store: Arc<dyn RefreshTokenStore>,
    generate_value: RefreshValueGenerator,
}

impl TokenIssuer {
    pub fn new(config: AuthConfig, store: Arc<dyn RefreshTokenStore>) -> Self {
        Self {
            config,
            store,
            generate_value: Box::new(random_refresh_value),
        }
    }

    /// 리프레시 토큰 값 생성 함수를 교체합니다.
    pub fn with_value_generator<F>(mut self, generator: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.generate_value = Box::new(generator);
        self
    }

    /// 사용자에 대한 액세스 토큰 클레임을 만듭니다. 서명은 하지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::IdentityMissing` - 아직 저장되지 않아 ID가 없는 사용자
    /// * `AuthError::SigningError` - 만료 시각이 표현 가능한 범위를 넘는 경우
    pub fn issue_access_token(&self, user: &User) -> Result<AccessTokenClaims, AuthError> {
        let user_id = user.id_string().ok_or(AuthError::IdentityMissing)?;
        let now = Utc::now();
        let expiration = now
            .checked_add_signed(self.config.access_token_ttl())
            .ok_or_else(|| AuthError::SigningError("access token expiry out of range".to_string()))?;

        Ok(AccessTokenClaims {
            sub: user_id.clone(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer().to_string(),
            aud: vec![self.config.audience().to_string()],
            jti: Uuid::new_v4().to_string(),
            user_id,
            email: user.email.clone(),
            role: user.role,
        })
    }

    /// 액세스 토큰 클레임과 저장된 리프레시 토큰을 함께 발급합니다.
    ///
    /// 리프레시 토큰 값이 기존 값과 충돌하면 새 값으로 다시 시도하며,
    /// 시도 횟수를 모두 소진한 경우에만 `ConflictError`를 반환합니다.
    pub async fn issue_pair(&self, user: &User) -> AppResult<TokenPair> {
        let claims = self.issue_access_token(user)?;
        let user_id = user.id.ok_or(AuthError::IdentityMissing)?;
        let expires_at = Utc::now()
            .checked_add_signed(self.config.refresh_token_ttl())
            .map(to_bson_datetime)
            .ok_or_else(|| AppError::InternalError("refresh token expiry out of range".to_string()))?;

        for attempt in 1..=MAX_ISSUE_ATTEMPTS {
            let value = (self.generate_value)();

            match self.store.create(&user_id, &value, expires_at).await {
                Ok(refresh_token) => {
                    log::debug!(
                        "리프레시 토큰 발급 - user_id: {}, token: {}...",
                        user_id,
                        token_prefix(&value)
                    );
                    return Ok(TokenPair { claims, refresh_token });
                }
                Err(AppError::ConflictError(_)) => {
                    log::warn!(
                        "리프레시 토큰 값 충돌 (시도 {}/{}), 새 값으로 재시도",
                        attempt,
                        MAX_ISSUE_ATTEMPTS
                    );
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::ConflictError(
            "리프레시 토큰 값을 생성하지 못했습니다".to_string(),
        ))
    }
}
