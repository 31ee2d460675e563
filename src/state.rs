//! 애플리케이션 공유 상태
//!
//! 시작 시 한 번 조립되어 `web::Data<AppState>`로 모든 워커에 공유됩니다.
//! 요청 처리 중에는 읽기만 합니다.

use std::sync::Arc;

use crate::config::AuthConfig;
use crate::repositories::tokens::RefreshTokenStore;
use crate::repositories::users::UserDirectory;
use crate::services::auth::{
    AccessTokenRevocation, AuthenticationPipeline, ClaimsCodec, RevocationService, TokenIssuer,
    TokenVerifier,
};
use crate::services::users::{PasswordVerifier, UserService};

#[derive(Clone)]
pub struct AppState {
    pub codec: ClaimsCodec,
    pub issuer: Arc<TokenIssuer>,
    pub verifier: Arc<TokenVerifier>,
    pub revocation: Arc<RevocationService>,
    pub access_revocation: Arc<dyn AccessTokenRevocation>,
    pub users: Arc<UserService>,
    pub pipeline: Arc<AuthenticationPipeline>,
}

impl AppState {
    /// 저장소와 협력자로부터 토큰 컴포넌트를 조립합니다.
    ///
    /// 같은 `AuthConfig`가 서명, 발급, 검증에 모두 전달됩니다.
    pub fn new(
        config: AuthConfig,
        store: Arc<dyn RefreshTokenStore>,
        directory: Arc<dyn UserDirectory>,
        passwords: Arc<dyn PasswordVerifier>,
        access_revocation: Arc<dyn AccessTokenRevocation>,
    ) -> Self {
        let codec = ClaimsCodec::new(&config);
        let users = Arc::new(UserService::new(directory, passwords));
        let verifier = Arc::new(TokenVerifier::new(codec.clone(), store.clone()));
        let pipeline = Arc::new(AuthenticationPipeline::new(
            verifier.clone(),
            access_revocation.clone(),
            users.clone(),
        ));

        Self {
            codec,
            issuer: Arc::new(TokenIssuer::new(config, store.clone())),
            verifier,
            revocation: Arc::new(RevocationService::new(store)),
            access_revocation,
            users,
            pipeline,
        }
    }
}
